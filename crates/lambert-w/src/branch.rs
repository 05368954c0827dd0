use std::fmt;

/// The real branches of the Lambert W function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The principal branch, W0, with `w >= -1` for `x >= -1/e`.
    Principal,

    /// The secondary real branch, W1, with `w <= -1` for `-1/e <= x < 0`.
    Secondary,
}

impl Branch {
    /// Returns the sign that selects this branch in the branch-point series.
    ///
    /// Both branches grow out of `w = -1` as `±sqrt(2·(e·x + 1))`.
    pub(crate) fn sign(self) -> f64 {
        match self {
            Branch::Principal => 1.0,
            Branch::Secondary => -1.0,
        }
    }

    /// Returns true if `w` lies on this branch.
    #[must_use]
    pub fn contains(self, w: f64) -> bool {
        match self {
            Branch::Principal => w >= -1.0,
            Branch::Secondary => w <= -1.0,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Principal => f.write_str("W0"),
            Branch::Secondary => f.write_str("W1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branches_meet_at_minus_one() {
        assert!(Branch::Principal.contains(-1.0));
        assert!(Branch::Secondary.contains(-1.0));

        assert!(Branch::Principal.contains(0.5));
        assert!(!Branch::Secondary.contains(0.5));

        assert!(!Branch::Principal.contains(-3.0));
        assert!(Branch::Secondary.contains(-3.0));
    }

    #[test]
    fn displays_conventional_names() {
        assert_eq!(Branch::Principal.to_string(), "W0");
        assert_eq!(Branch::Secondary.to_string(), "W1");
    }
}
