//! Inferred-type representation for the Twine compiler.
//!
//! Types are attached to AST nodes by the inference collaborator. The
//! emitter only ever consumes their printed names, so for concrete types the
//! printed name doubles as the Go rendering (`int64`, `[]string`, user type
//! names verbatim). Type variables print with a leading `'` sigil; a
//! function whose signature still mentions one is not concrete and is
//! deferred to monomorphisation.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A function type: the ordered parameter types followed by the return
/// type, plus the environment captured at the definition site.
///
/// The captured environment is what makes nested functions (closures)
/// emittable: the backend swaps its own environment for this one while the
/// body is generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FnTy {
    /// Parameter types followed by the return type, in order.
    pub types: Vec<Ty>,
    /// Names in scope at the definition site, with their inferred types.
    pub env: FxHashMap<String, Ty>,
}

/// An inferred Twine type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ty {
    /// An unresolved type variable, printed with a leading `'`.
    Var(String),
    /// A named type constructor. The name is the Go rendering: `int64` for
    /// surface `Int`, user record and variant names verbatim.
    Con(String),
    /// A slice type.
    Array(Box<Ty>),
    /// A tuple type, printed as a parenthesised Go multi-return list.
    Tuple(Vec<Ty>),
    /// The unit type.
    Unit,
    /// A function type with its captured environment.
    Fun(FnTy),
}

impl Ty {
    /// The surface `Int` type.
    pub fn int() -> Ty {
        Ty::Con("int64".to_string())
    }

    /// The surface `Float` type.
    pub fn float() -> Ty {
        Ty::Con("float64".to_string())
    }

    /// The surface `String` type.
    pub fn string() -> Ty {
        Ty::Con("string".to_string())
    }

    /// The surface `Bool` type.
    pub fn bool() -> Ty {
        Ty::Con("bool".to_string())
    }

    /// A named nominal type (record, variant, or alias).
    pub fn named(name: impl Into<String>) -> Ty {
        Ty::Con(name.into())
    }

    /// A slice of `elem`.
    pub fn array(elem: Ty) -> Ty {
        Ty::Array(Box::new(elem))
    }

    /// A type variable. The name is stored without the sigil; `var("a")`
    /// prints as `'a`.
    pub fn var(name: impl Into<String>) -> Ty {
        Ty::Var(name.into())
    }

    /// A function type from its parameter-plus-return list and captured
    /// environment.
    pub fn fun(types: Vec<Ty>, env: FxHashMap<String, Ty>) -> Ty {
        Ty::Fun(FnTy { types, env })
    }

    /// True for the unit type (including the empty tuple).
    pub fn is_unit(&self) -> bool {
        match self {
            Ty::Unit => true,
            Ty::Tuple(elems) => elems.is_empty(),
            _ => false,
        }
    }

    /// The printed name of the type.
    ///
    /// For concrete types this is spliced verbatim into emitted Go (slice
    /// literal prefixes, `var` declarations, parameter lists). For type
    /// variables it begins with `'`, which is how the function emitter
    /// detects a non-concrete signature.
    pub fn name(&self) -> String {
        match self {
            Ty::Var(v) => format!("'{v}"),
            Ty::Con(n) => n.clone(),
            Ty::Array(elem) => format!("[]{}", elem.name()),
            Ty::Tuple(elems) => {
                let names: Vec<String> = elems.iter().map(Ty::name).collect();
                format!("({})", names.join(", "))
            }
            Ty::Unit => "()".to_string(),
            Ty::Fun(f) => {
                let (ret, params) = match f.types.split_last() {
                    Some((ret, params)) => (Some(ret), params),
                    None => (None, &f.types[..]),
                };
                let names: Vec<String> = params.iter().map(Ty::name).collect();
                match ret {
                    Some(ret) if !ret.is_unit() => {
                        format!("func({}) {}", names.join(", "), ret.name())
                    }
                    _ => format!("func({})", names.join(", ")),
                }
            }
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names() {
        assert_eq!(Ty::int().name(), "int64");
        assert_eq!(Ty::float().name(), "float64");
        assert_eq!(Ty::string().name(), "string");
        assert_eq!(Ty::bool().name(), "bool");
        assert_eq!(Ty::Unit.name(), "()");
    }

    #[test]
    fn type_variable_prints_with_sigil() {
        assert_eq!(Ty::var("a").name(), "'a");
        assert!(Ty::var("a").name().starts_with('\''));
    }

    #[test]
    fn array_name() {
        assert_eq!(Ty::array(Ty::int()).name(), "[]int64");
        assert_eq!(Ty::array(Ty::array(Ty::string())).name(), "[][]string");
    }

    #[test]
    fn tuple_name() {
        assert_eq!(
            Ty::Tuple(vec![Ty::int(), Ty::string()]).name(),
            "(int64, string)"
        );
    }

    #[test]
    fn function_name() {
        let ty = Ty::fun(
            vec![Ty::int(), Ty::string(), Ty::bool()],
            FxHashMap::default(),
        );
        assert_eq!(ty.name(), "func(int64, string) bool");
    }

    #[test]
    fn function_name_unit_return() {
        let ty = Ty::fun(vec![Ty::int(), Ty::Unit], FxHashMap::default());
        assert_eq!(ty.name(), "func(int64)");
    }

    #[test]
    fn unit_detection() {
        assert!(Ty::Unit.is_unit());
        assert!(Ty::Tuple(vec![]).is_unit());
        assert!(!Ty::int().is_unit());
        assert!(!Ty::Tuple(vec![Ty::int()]).is_unit());
    }

    #[test]
    fn named_type_is_verbatim() {
        assert_eq!(Ty::named("Tree").name(), "Tree");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Ty::array(Ty::int()).to_string(), "[]int64");
    }
}
