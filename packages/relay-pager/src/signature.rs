//! Declared parameter and result shapes of a resolver, inspected once at build time.

use crate::{
    arguments::ArgsDescriptor,
    error::{BuildError, BuildResult},
    object::TypeDescriptor,
};
use std::fmt;

#[derive(Clone, Debug)]
pub enum ParamType {
    Context,
    Source(TypeDescriptor),
    Args(ArgsDescriptor),
    SelectionSet,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    List(Box<ValueType>),
    Object(TypeDescriptor),
    Scalar(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultType {
    Value(ValueType),
    PaginationInfo,
    Error,
}

/// Parameters accepted in `[context][, source][, args][, selectionSet]` order.
#[derive(Clone, Debug, Default)]
pub struct ParamShape {
    pub context: bool,
    pub source: Option<TypeDescriptor>,
    pub args: Option<ArgsDescriptor>,
    pub selection_set: bool,
}

/// Results accepted in `[result][, pagination info][, error]` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReturnShape {
    pub value: Option<ValueType>,
    pub pagination_info: bool,
    pub error: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Signature {
    pub params: Vec<ParamType>,
    pub results: Vec<ResultType>,
}

impl Signature {
    pub fn new(params: Vec<ParamType>, results: Vec<ResultType>) -> Self {
        Self { params, results }
    }

    pub fn param_shape(&self) -> BuildResult<ParamShape> {
        let mut shape = ParamShape::default();
        let mut params = self.params.iter().peekable();

        if let Some(ParamType::Context) = params.peek() {
            shape.context = true;
            params.next();
        }
        if let Some(ParamType::Source(source)) = params.peek() {
            shape.source = Some(*source);
            params.next();
        }
        if let Some(ParamType::Args(args)) = params.peek() {
            shape.args = Some(args.clone());
            params.next();
        }
        if let Some(ParamType::SelectionSet) = params.peek() {
            shape.selection_set = true;
            params.next();
        }

        match params.next() {
            Some(_) => Err(BuildError::ParamSignature(self.to_string())),
            None => Ok(shape),
        }
    }

    pub fn return_shape(&self, non_nullable: bool) -> BuildResult<ReturnShape> {
        let mut shape = ReturnShape::default();
        let mut results = self.results.iter().peekable();

        if let Some(ResultType::Value(value)) = results.peek() {
            shape.value = Some(value.clone());
            results.next();
        }
        if let Some(ResultType::PaginationInfo) = results.peek() {
            shape.pagination_info = true;
            results.next();
        }
        if let Some(ResultType::Error) = results.peek() {
            shape.error = true;
            results.next();
        }

        if results.next().is_some() {
            return Err(BuildError::ReturnSignature(self.to_string()));
        }
        if shape.value.is_none() && non_nullable {
            return Err(BuildError::NoReturnValue(self.to_string()));
        }
        Ok(shape)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::List(inner) => write!(f, "Vec<{inner}>"),
            ValueType::Object(descriptor) => write!(f, "{descriptor}"),
            ValueType::Scalar(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Context => f.write_str("Context"),
            ParamType::Source(descriptor) => write!(f, "&{descriptor}"),
            ParamType::Args(args) => write!(f, "{}", args.type_descriptor()),
            ParamType::SelectionSet => f.write_str("SelectionSet"),
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultType::Value(value) => write!(f, "{value}"),
            ResultType::PaginationInfo => f.write_str("PaginationInfo"),
            ResultType::Error => f.write_str("Error"),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let results = self
            .results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "fn({params}) -> ({results})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct Item;

    fn items() -> ResultType {
        ResultType::Value(ValueType::List(Box::new(ValueType::Object(
            TypeDescriptor::of::<Item>(),
        ))))
    }

    #[test]
    fn test_params_in_order() {
        let signature = Signature::new(
            vec![
                ParamType::Context,
                ParamType::Source(TypeDescriptor::of::<Item>()),
                ParamType::SelectionSet,
            ],
            vec![items()],
        );
        let shape = signature.param_shape().unwrap();
        assert!(shape.context);
        assert_eq!(shape.source, Some(TypeDescriptor::of::<Item>()));
        assert!(shape.args.is_none());
        assert!(shape.selection_set);
    }

    #[test]
    fn test_params_out_of_order() {
        let signature = Signature::new(
            vec![ParamType::SelectionSet, ParamType::Context],
            vec![items()],
        );
        assert_matches!(
            signature.param_shape(),
            Err(BuildError::ParamSignature(sig)) if sig.starts_with("fn(SelectionSet, Context)")
        );
    }

    #[test]
    fn test_results_in_order() {
        let signature = Signature::new(
            vec![],
            vec![items(), ResultType::PaginationInfo, ResultType::Error],
        );
        let shape = signature.return_shape(true).unwrap();
        assert!(shape.value.is_some());
        assert!(shape.pagination_info);
        assert!(shape.error);
    }

    #[test]
    fn test_results_out_of_order() {
        let signature = Signature::new(
            vec![],
            vec![items(), ResultType::Error, ResultType::PaginationInfo],
        );
        assert_matches!(
            signature.return_shape(true),
            Err(BuildError::ReturnSignature(_))
        );

        let signature = Signature::new(vec![], vec![items(), items()]);
        assert_matches!(
            signature.return_shape(true),
            Err(BuildError::ReturnSignature(_))
        );
    }

    #[test]
    fn test_non_nullable_without_value() {
        let signature = Signature::new(vec![], vec![ResultType::Error]);
        let err = signature.return_shape(true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fn() -> (Error) is marked non-nullable, but has no return value"
        );
        assert_matches!(signature.return_shape(false), Ok(_));
    }
}
