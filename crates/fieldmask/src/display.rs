//! Canonical compact rendering of masks.
//!
//! Siblings are written in field-name order, so equal masks always render to
//! the same text. The output parses back to an equal mask with
//! [`Mask::parse`].

use std::fmt::{self, Write as _};

use crate::Mask;

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exclusion() {
            f.write_char('!')?;
        }
        write_level(self, f)
    }
}

fn write_level(mask: &Mask, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    let mut separator = |f: &mut fmt::Formatter<'_>| {
        if first {
            first = false;
            Ok(())
        } else {
            f.write_char(',')
        }
    };

    match mask {
        Mask::Inclusion(fields) => {
            for (name, child) in fields {
                separator(f)?;
                f.write_str(name)?;
                write_child(mask, child, f)?;
            }
        }
        Mask::Exclusion(fields) => {
            for (name, child) in fields {
                match child {
                    None => {
                        separator(f)?;
                        f.write_str(name)?;
                    }
                    // Passes the whole field, same as not listing it.
                    Some(child) if child.passes_all() => {}
                    Some(child) => {
                        separator(f)?;
                        f.write_str(name)?;
                        write_child(mask, child, f)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn write_child(parent: &Mask, child: &Mask, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let flipped = parent.is_exclusion() != child.is_exclusion();
    if child.is_empty() && !flipped {
        return Ok(());
    }
    f.write_char('{')?;
    if flipped {
        f.write_char('!')?;
    }
    write_level(child, f)?;
    f.write_char('}')
}
