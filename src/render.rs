use crate::error::FinderError;
use crate::facets::Facets;
use crate::filter::FilterState;
use crate::model::Recipe;
use std::io::Write;

/// Everything a renderer needs to draw the current screen
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub facets: &'a Facets,
    pub results: &'a [&'a Recipe],
    pub state: &'a FilterState,
}

/// Consumer of filtered results, e.g. a terminal printer or an HTML template.
///
/// Implementations must not assume anything about how results were produced;
/// a failure is reported as [`FinderError::RenderingFault`].
pub trait Renderer {
    fn render(&mut self, view: &View<'_>) -> Result<(), FinderError>;
}

/// Writes recipe cards as plain text
pub struct PlainTextRenderer<W: Write> {
    out: W,
}

impl<W: Write> PlainTextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, recipe: &Recipe) -> std::io::Result<()> {
        writeln!(self.out, "## {}", recipe.name)?;
        writeln!(self.out, "Servings: {}", recipe.servings_label())?;
        if !recipe.tags.is_empty() {
            writeln!(self.out, "Tags: {}", recipe.tags.join(", "))?;
        }

        for section in recipe.ingredient_sections() {
            writeln!(self.out, "\n### {}", section.heading)?;
            for line in section.lines {
                writeln!(self.out, "- {}", line.display())?;
            }
        }

        for section in recipe.instruction_sections() {
            writeln!(self.out, "\n### {}", section.heading)?;
            for (n, step) in section.lines.iter().enumerate() {
                writeln!(self.out, "{}. {}", n + 1, step)?;
            }
        }

        writeln!(self.out)
    }

    fn write_view(&mut self, view: &View<'_>) -> std::io::Result<()> {
        for recipe in view.results {
            self.write_card(recipe)?;
        }
        if view.results.is_empty() {
            writeln!(self.out, "No recipes match your filters.")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for PlainTextRenderer<W> {
    fn render(&mut self, view: &View<'_>) -> Result<(), FinderError> {
        self.write_view(view)
            .map_err(|e| FinderError::RenderingFault(e.to_string()))
    }
}
