use crate::render::command::RenderCommand;
use crate::result::IouvisResult;

pub trait CommandRenderer {
    fn render(&mut self, commands: &[RenderCommand]) -> IouvisResult<()>;
}
