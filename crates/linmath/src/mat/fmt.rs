//! Human-readable matrix formatting (cosmetic only).
//!
//! One-column matrices (vectors/points) print as a single angle-bracket line,
//! everything else as a bracketed grid. Three decimal places; non-negative
//! values get a leading space so columns line up against minus signs.

use std::fmt;

use super::Mat;

impl<const R: usize, const C: usize> fmt::Display for Mat<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if C == 1 {
            write!(f, "<")?;
            for r in 0..R {
                if r > 0 {
                    write!(f, ", ")?;
                }
                let value = self.get(r, 0);
                if value >= 0.0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:.3}")?;
            }
            write!(f, ">")
        } else {
            for r in 0..R {
                if r > 0 {
                    writeln!(f)?;
                }
                write!(f, "|")?;
                for c in 0..C {
                    if c > 0 {
                        write!(f, "  ")?;
                    }
                    let value = self.get(r, c);
                    if value >= 0.0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{value:.3}")?;
                }
                write!(f, " |")?;
            }
            Ok(())
        }
    }
}
