//! Placeholder image references.
//!
//! Images are literal path strings served by an external asset server. The
//! query string carries the size and caption hints that server understands:
//! `/img.png?height=H&width=W&text=T`.

use std::fmt;

/// Path of the placeholder image endpoint.
pub const PLACEHOLDER_PATH: &str = "/img.png";

/// Builder for a placeholder image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    width: u32,
    height: u32,
    text: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            text: None,
        }
    }

    /// Caption rendered into the placeholder. Spaces are encoded as `+`.
    #[must_use]
    pub const fn text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }
}

impl fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PLACEHOLDER_PATH}?height={}&width={}",
            self.height, self.width
        )?;
        if let Some(text) = self.text {
            write!(f, "&text={}", text.replace(' ', "+"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_size_hints_height_first() {
        assert_eq!(
            Placeholder::new(600, 400).to_string(),
            "/img.png?height=400&width=600"
        );
    }

    #[test]
    fn should_encode_spaces_in_caption() {
        assert_eq!(
            Placeholder::new(400, 300).text("Massage Therapy").to_string(),
            "/img.png?height=300&width=400&text=Massage+Therapy"
        );
    }
}
