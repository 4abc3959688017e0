//! Text rendering: `(x,y,z)`.
//!
//! The caller's precision and `+` flag are applied to each component as if
//! it were printed alone. Width, fill and alignment apply to the whole
//! vector. The text is assembled in a local buffer and only then written out.

use std::fmt::{self, Write as _};

use crate::config::FormatOptions;
use crate::vector::Vec3;

macro_rules! text_impl {
    ($trait:ident, $plain:literal, $plus:literal, $prec:literal, $plus_prec:literal) => {
        impl<T: fmt::$trait> fmt::$trait for Vec3<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buf = String::new();
                buf.push('(');
                for (i, c) in [&self.x, &self.y, &self.z].into_iter().enumerate() {
                    if i > 0 {
                        buf.push(',');
                    }
                    match (f.sign_plus(), f.precision()) {
                        (false, None) => write!(buf, $plain, c)?,
                        (true, None) => write!(buf, $plus, c)?,
                        (false, Some(p)) => write!(buf, $prec, p, c)?,
                        (true, Some(p)) => write!(buf, $plus_prec, p, c)?,
                    }
                }
                buf.push(')');
                pad_whole(f, &buf)
            }
        }
    };
}

text_impl!(Display, "{}", "{:+}", "{:.*}", "{:+.*}");
text_impl!(LowerExp, "{:e}", "{:+e}", "{:.*e}", "{:+.*e}");
text_impl!(UpperExp, "{:E}", "{:+E}", "{:.*E}", "{:+.*E}");

/// Writes `text` honoring width, fill and alignment but not precision
/// (`Formatter::pad` would truncate to the precision). Right-aligned by
/// default, like numbers.
fn pad_whole(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let Some(width) = f.width() else {
        return f.write_str(text);
    };
    let len = text.chars().count();
    if len >= width {
        return f.write_str(text);
    }

    let pad = width - len;
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Left) => (0, pad),
        Some(fmt::Alignment::Center) => (pad / 2, pad - pad / 2),
        Some(fmt::Alignment::Right) | None => (pad, 0),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

impl<T> Vec3<T>
where
    T: fmt::Display + fmt::LowerExp + fmt::UpperExp,
{
    /// Renders with an explicit formatting context instead of a format string.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        options.render(self)
    }
}
