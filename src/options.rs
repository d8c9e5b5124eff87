/// Decimal digits kept when rendering a result. Negative means "no rounding".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision(pub i32);

/// Precision used when the caller does not pick one.
pub const DEFAULT_PRECISION: i32 = 6;

impl Precision {
    /// Presets offered by the calculator settings screen.
    pub const PRESETS: [Precision; 5] = [
        Precision(0),
        Precision(2),
        Precision(4),
        Precision(6),
        Precision(8),
    ];

    /// Render the raw value without rounding.
    pub const UNROUNDED: Precision = Precision(-1);

    pub fn digits(self) -> Option<i32> {
        if self.0 < 0 {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}

impl From<i32> for Precision {
    fn from(v: i32) -> Self {
        Precision(v)
    }
}

/// What `/` and `%` do with a zero divisor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DivisionPolicy {
    /// Follow IEEE 754: `5/0` is `Infinity`, `0/0` and `5%0` are `NaN`.
    #[default]
    Ieee,
    /// Fail with [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero).
    Error,
}

/// Settings for a [`Calculator`](crate::Calculator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalOptions {
    pub precision: Precision,
    pub division: DivisionPolicy,
}

impl EvalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: impl Into<Precision>) -> Self {
        self.precision = precision.into();
        self
    }

    pub fn with_division_policy(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }
}
