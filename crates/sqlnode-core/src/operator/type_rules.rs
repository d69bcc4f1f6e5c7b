//! Reusable return-type and operand-type rules.

use core::fmt;

use super::binding::OperatorBinding;
use crate::types::DataType;

/// Derives the result type of a call from its operator binding.
pub trait ReturnTypeInference: fmt::Debug + Send + Sync {
    /// Returns the result type, or `None` if it cannot be decided.
    fn infer_return_type(&self, binding: &dyn OperatorBinding) -> Option<DataType>;
}

/// Always returns the same type, completed by the binding's type factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitReturnType(DataType);

impl ExplicitReturnType {
    /// Creates the rule.
    #[must_use]
    pub const fn new(data_type: DataType) -> Self {
        Self(data_type)
    }

    /// The declared type.
    #[must_use]
    pub const fn data_type(&self) -> &DataType {
        &self.0
    }
}

impl ReturnTypeInference for ExplicitReturnType {
    fn infer_return_type(&self, binding: &dyn OperatorBinding) -> Option<DataType> {
        Some(binding.type_factory().create_sql_type(self.0.clone()))
    }
}

/// Returns the type of the first operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstOperandType;

impl ReturnTypeInference for FirstOperandType {
    fn infer_return_type(&self, binding: &dyn OperatorBinding) -> Option<DataType> {
        binding.operand_type(0)
    }
}

/// Shared return-type rules.
pub mod return_types {
    use super::{ExplicitReturnType, FirstOperandType};
    use crate::types::DataType;

    /// Integer rank: `RANK`, `DENSE_RANK`, `ROW_NUMBER`.
    pub const RANK: ExplicitReturnType = ExplicitReturnType::new(DataType::Bigint);

    /// Fractional rank: `PERCENT_RANK`, `CUME_DIST`.
    pub const FRACTIONAL_RANK: ExplicitReturnType = ExplicitReturnType::new(DataType::Double);

    /// Same type as the first operand.
    pub const ARG0: FirstOperandType = FirstOperandType;
}

/// Inclusive range of accepted operand counts; `max` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandCountRange {
    /// Least accepted count.
    pub min: usize,
    /// Greatest accepted count.
    pub max: Option<usize>,
}

impl OperandCountRange {
    /// Exactly zero operands.
    pub const NILADIC: Self = Self::of(0);

    /// Any number of operands.
    pub const VARIADIC: Self = Self { min: 0, max: None };

    /// Exactly `count` operands.
    #[must_use]
    pub const fn of(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    /// Between `min` and `max` operands, inclusive.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Whether `count` is within the range.
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for OperandCountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{} to {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Checks the operands of a call.
pub trait OperandTypeChecker: fmt::Debug + Send + Sync {
    /// Accepted operand counts.
    fn operand_count_range(&self) -> OperandCountRange;

    /// Whether the bound operand types are acceptable. The count has already
    /// been checked.
    fn check_operand_types(&self, binding: &dyn OperatorBinding) -> bool;
}

/// Common operand rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandTypes {
    /// No operands.
    Niladic,
    /// Any number of operands of any type.
    Variadic,
    /// Exactly one operand of any type.
    Any,
}

impl OperandTypeChecker for OperandTypes {
    fn operand_count_range(&self) -> OperandCountRange {
        match self {
            Self::Niladic => OperandCountRange::NILADIC,
            Self::Variadic => OperandCountRange::VARIADIC,
            Self::Any => OperandCountRange::of(1),
        }
    }

    fn check_operand_types(&self, _binding: &dyn OperatorBinding) -> bool {
        true
    }
}
