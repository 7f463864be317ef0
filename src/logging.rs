use crate::err;
use crate::result::IouvisResult;
use tracing::Level;

pub fn init_logging(level: Level) -> IouvisResult<()> {
    tracing_log::LogTracer::init()?;
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub fn parse_level(name: &str) -> IouvisResult<Level> {
    name.parse::<Level>()
        .map_err(|_| err!("Unknown log level '{}'", name))
}
