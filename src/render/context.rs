use crate::render::command::RenderCommand;
use crate::render::styling::Styling;

pub struct RenderContext<'a> {
    styling: &'a Styling,
    render_queue: Vec<RenderCommand>,
}

impl<'a> RenderContext<'a> {
    pub fn new(styling: &'a Styling) -> Self {
        Self {
            styling,
            render_queue: vec![],
        }
    }
}

impl RenderContext<'_> {
    pub fn styling(&self) -> &Styling {
        self.styling
    }

    pub fn add_command(&mut self, command: RenderCommand) {
        self.render_queue.push(command);
    }

    pub fn add_commands(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.render_queue.extend(commands);
    }

    /// Runs `draw` between a `Save` and a matching `Restore`
    pub fn saved(&mut self, draw: impl FnOnce(&mut Self)) {
        self.add_command(RenderCommand::Save);
        draw(self);
        self.add_command(RenderCommand::Restore);
    }

    pub fn render_queue(self) -> Vec<RenderCommand> {
        self.render_queue
    }
}
