//! Formatting utilities
use std::fmt;
use std::time::Duration;

/// Pretty-printing
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrettyPrint<T>(pub T);

impl fmt::Display for PrettyPrint<f64> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.0.abs();
        if (magnitude >= 1e6 || magnitude <= 1e-4) && self.0 != 0.0 {
            fmt::LowerExp::fmt(&self.0, f)
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// Display a count of events per second
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rate(pub f64);

impl Rate {
    pub fn new(count: u64, elapsed: Duration) -> Self {
        Self(count as f64 / elapsed.as_secs_f64())
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.0;
        let (coef, unit) = if (1e3..1e6).contains(&value) {
            (value / 1e3, "k/s")
        } else if value >= 1e6 {
            (value / 1e6, "M/s")
        } else {
            (value, "/s")
        };
        fmt::Display::fmt(&PrettyPrint(coef), f)?;
        f.write_str(unit)
    }
}

/// Wraps a closure as the Display implementation
#[derive(Debug)]
pub struct DisplayFn<F>(pub F)
where
    // Bounded here so that the closure type does not have to be specified on creation
    F: Fn(&mut fmt::Formatter) -> fmt::Result;

impl<F> fmt::Display for DisplayFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        (self.0)(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_small_uses_exp() {
        assert_eq!(format!("{:.1}", PrettyPrint(0.00001)), "1.0e-5");
    }

    #[test]
    fn pretty_print_regular() {
        assert_eq!(format!("{:.2}", PrettyPrint(1.2345)), "1.23");
    }

    #[test]
    fn rate_units() {
        assert_eq!(format!("{:.1}", Rate::new(2500, Duration::from_secs(1))), "2.5k/s");
        assert_eq!(format!("{:.1}", Rate::new(3, Duration::from_secs(2))), "1.5/s");
    }

    #[test]
    fn display_fn() {
        assert_eq!(format!("{}", DisplayFn(|f| write!(f, "[{}]", 3))), "[3]");
    }
}
