//! Queries over recorded draw-command trees.

use neumorph_core::{DrawCommand, Point, Shadow, Transform2D};

/// A leaf draw command together with everything its ancestors apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawn<'a> {
    /// The leaf command (path, rect, circle or text)
    pub command: &'a DrawCommand,
    /// Local-to-frame transform
    pub transform: Transform2D,
    /// Product of all enclosing opacities
    pub opacity: f32,
    /// Largest enclosing blur radius (0 = sharp)
    pub blur: f32,
    /// Enclosing shadows, innermost first
    pub shadows: Vec<Shadow>,
    /// Whether an enclosing mask clips the command
    pub masked: bool,
}

impl<'a> Drawn<'a> {
    fn root(command: &'a DrawCommand) -> Self {
        Self {
            command,
            transform: Transform2D::identity(),
            opacity: 1.0,
            blur: 0.0,
            shadows: Vec::new(),
            masked: false,
        }
    }

    /// Text content, if the command is text.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        match self.command {
            DrawCommand::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Anchor of the command in frame coordinates: text position or circle
    /// center.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self.command {
            DrawCommand::Text { position, .. } => Some(self.transform.apply(*position)),
            DrawCommand::Circle { center, .. } => Some(self.transform.apply(*center)),
            DrawCommand::Rect { bounds, .. } => Some(self.transform.apply(bounds.origin())),
            _ => None,
        }
    }

    /// Whether any enclosing shadow is a glow (no offset).
    #[must_use]
    pub fn is_glowing(&self) -> bool {
        self.shadows
            .iter()
            .any(|s| s.offset_y == 0.0 && !s.color.is_transparent())
    }
}

/// Flatten command trees into their visible leaves, back-to-front.
///
/// Mask shapes are not visible content and are skipped.
#[must_use]
pub fn flatten(commands: &[DrawCommand]) -> Vec<Drawn<'_>> {
    let mut out = Vec::new();
    for command in commands {
        visit(Drawn::root(command), &mut out);
    }
    out
}

fn visit<'a>(state: Drawn<'a>, out: &mut Vec<Drawn<'a>>) {
    let command: &'a DrawCommand = state.command;
    match command {
        DrawCommand::Group {
            children,
            transform,
        } => {
            let transform = transform.then(&state.transform);
            for child in children {
                visit(
                    Drawn {
                        command: child,
                        transform,
                        ..state.clone()
                    },
                    out,
                );
            }
        }
        DrawCommand::Opacity { alpha, child } => visit(
            Drawn {
                command: child,
                opacity: state.opacity * alpha,
                ..state
            },
            out,
        ),
        DrawCommand::Blur { radius, child } => visit(
            Drawn {
                command: child,
                blur: state.blur.max(*radius),
                ..state
            },
            out,
        ),
        DrawCommand::Shadowed { shadow, child } => {
            let mut shadows = vec![*shadow];
            shadows.extend(state.shadows.iter().copied());
            visit(
                Drawn {
                    command: child,
                    shadows,
                    ..state
                },
                out,
            );
        }
        DrawCommand::Mask { child, .. } => visit(
            Drawn {
                command: child,
                masked: true,
                ..state
            },
            out,
        ),
        DrawCommand::Path { .. }
        | DrawCommand::Rect { .. }
        | DrawCommand::Circle { .. }
        | DrawCommand::Text { .. } => out.push(state),
    }
}

/// Find the first text leaf with the given content.
#[must_use]
pub fn find_text<'a>(commands: &'a [DrawCommand], content: &str) -> Option<Drawn<'a>> {
    flatten(commands)
        .into_iter()
        .find(|d| d.text() == Some(content))
}

/// All text contents, back-to-front.
#[must_use]
pub fn texts(commands: &[DrawCommand]) -> Vec<&str> {
    flatten(commands).iter().filter_map(Drawn::text).collect()
}
