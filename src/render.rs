use std::io::{self, Write};

use crate::TraceState;

pub const GUI_FALLBACK_NOTICE: &str = "GUI is not implemented, defaulting to console.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Console,
    Gui,
}

pub trait Renderer {
    fn render(&mut self, traces: &[TraceState]) -> io::Result<()>;
}

/// Writes each trace's grid followed by an empty line.
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, traces: &[TraceState]) -> io::Result<()> {
        for trace in traces {
            writeln!(self.out, "{}", trace)?;
        }

        self.out.flush()
    }
}

/// Stand-in for a graphical view, announces the fallback once created and then writes
/// the console output.
#[derive(Debug)]
pub struct GuiRenderer<W: Write> {
    fallback: ConsoleRenderer<W>,
}

impl<W: Write> GuiRenderer<W> {
    pub fn new(out: W) -> Self {
        eprintln!("{}", GUI_FALLBACK_NOTICE);
        Self {
            fallback: ConsoleRenderer::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.fallback.into_inner()
    }
}

impl<W: Write> Renderer for GuiRenderer<W> {
    fn render(&mut self, traces: &[TraceState]) -> io::Result<()> {
        self.fallback.render(traces)
    }
}

pub fn renderer_for(mode: OutputMode) -> Box<dyn Renderer> {
    let out = io::stdout();
    match mode {
        OutputMode::Console => Box::new(ConsoleRenderer::new(out)),
        OutputMode::Gui => Box::new(GuiRenderer::new(out)),
    }
}
