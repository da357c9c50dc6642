//! Expression emission: literals, operators, slices, access paths, calls.

use twine_ast::{BasicLit, Node, Op, StrKind, Ty};

use super::Emitter;
use crate::error::EmitError;

/// Render a literal constant.
pub(crate) fn emit_basic(lit: &BasicLit) -> String {
    match lit {
        BasicLit::Str { value, kind } => match kind {
            StrKind::Comment => format!("//{value}\n"),
            StrKind::Quoted => format!("\"{value}\""),
            StrKind::Raw => value.clone(),
        },
        BasicLit::Char(c) => format!("'{c}'"),
        BasicLit::Int(v) => v.to_string(),
        BasicLit::Float(v) => format!("{v:.6}"),
        BasicLit::Bool(true) => "true".to_string(),
        BasicLit::Bool(false) => "false".to_string(),
        BasicLit::Nil => "nil".to_string(),
    }
}

/// Render an operator with its fixed Go mapping, space-padded so operands
/// never need separators of their own.
pub(crate) fn emit_operator(op: Op) -> String {
    format!(" {} ", op.go_symbol())
}

impl Emitter<'_> {
    /// A slice literal: the inferred slice type's printed name, then the
    /// elements, each with a trailing comma.
    pub(crate) fn emit_array(&mut self, ty: &Ty, elements: &[Node]) -> Result<String, EmitError> {
        let mut out = format!("{}{{", ty.name());
        for element in elements {
            out.push_str(&self.emit_node(element)?);
            out.push(',');
        }
        out.push('}');
        Ok(out)
    }

    /// An empty slice literal of the given element type.
    pub(crate) fn emit_array_type(&mut self, subtype: &Node) -> Result<String, EmitError> {
        Ok(format!("[]{}{{}}", self.emit_node(subtype)?))
    }

    pub(crate) fn emit_array_access(
        &mut self,
        target: &Node,
        index: &Node,
    ) -> Result<String, EmitError> {
        Ok(format!(
            "{}[{}]",
            self.emit_node(target)?,
            self.emit_node(index)?
        ))
    }

    /// A run of children, concatenated. `parens` wraps the run (binary
    /// operator groupings); `as_statement` terminates it with a newline.
    pub(crate) fn emit_grouping(
        &mut self,
        parens: bool,
        children: &[Node],
        as_statement: bool,
    ) -> Result<String, EmitError> {
        let mut inner = String::new();
        for child in children {
            inner.push_str(&self.emit_node(child)?);
        }
        if parens {
            Ok(format!("({inner})"))
        } else {
            if as_statement {
                inner.push('\n');
            }
            Ok(inner)
        }
    }

    pub(crate) fn emit_binop(
        &mut self,
        left: &Node,
        op: Op,
        right: &Node,
    ) -> Result<String, EmitError> {
        Ok(format!(
            "{}{}{}",
            self.emit_node(left)?,
            emit_operator(op),
            self.emit_node(right)?
        ))
    }

    /// A call, qualified with a package alias when the target is extern.
    pub(crate) fn emit_call(
        &mut self,
        module: Option<&str>,
        function: &Node,
        arguments: &[Node],
    ) -> Result<String, EmitError> {
        let mut out = String::new();
        if let Some(qualifier) = module {
            if !qualifier.is_empty() {
                out.push_str(qualifier);
                out.push('.');
            }
        }
        out.push_str(&self.emit_node(function)?);
        out.push('(');
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.emit_node(argument)?);
        }
        out.push_str(&args.join(", "));
        out.push(')');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::{FxHashMap, FxHashSet};
    use twine_ast::{Module, Node, Op, Ty};

    use super::*;

    fn emit(node: &Node) -> String {
        let module = Module::new("Test");
        let mut emitter = Emitter::new(&module, FxHashMap::default(), FxHashSet::default());
        emitter.emit_node(node).unwrap()
    }

    #[test]
    fn literal_rendering() {
        assert_eq!(emit(&Node::int(42)), "42");
        assert_eq!(emit(&Node::int(-3)), "-3");
        assert_eq!(emit(&Node::float(1.5)), "1.500000");
        assert_eq!(emit(&Node::bool(true)), "true");
        assert_eq!(emit(&Node::bool(false)), "false");
        assert_eq!(emit(&Node::nil()), "nil");
        assert_eq!(emit(&Node::string("hi")), "\"hi\"");
        assert_eq!(emit(&Node::raw("pre[0]")), "pre[0]");
        assert_eq!(emit(&Node::Basic(twine_ast::BasicLit::Char('x'))), "'x'");
    }

    #[test]
    fn comment_styles() {
        assert_eq!(emit(&Node::Comment(" note".to_string())), "// note\n");
        let lit = Node::Basic(twine_ast::BasicLit::Str {
            value: " note".to_string(),
            kind: twine_ast::StrKind::Comment,
        });
        assert_eq!(emit(&lit), "// note\n");
    }

    #[test]
    fn operators_are_space_padded() {
        assert_eq!(emit_operator(Op::Add), " + ");
        assert_eq!(emit_operator(Op::FMul), " * ");
        assert_eq!(emit_operator(Op::Concat), " + ");
        assert_eq!(emit_operator(Op::Le), " <= ");
    }

    #[test]
    fn array_literal_keeps_trailing_comma() {
        let node = Node::Array {
            ty: Ty::array(Ty::int()),
            elements: vec![Node::int(1), Node::int(2)],
        };
        assert_eq!(emit(&node), "[]int64{1,2,}");
    }

    #[test]
    fn empty_array_literal() {
        let node = Node::Array {
            ty: Ty::array(Ty::string()),
            elements: vec![],
        };
        assert_eq!(emit(&node), "[]string{}");
    }

    #[test]
    fn array_type_emits_empty_literal() {
        let node = Node::ArrayType {
            subtype: Box::new(Node::raw("int64")),
        };
        assert_eq!(emit(&node), "[]int64{}");
    }

    #[test]
    fn array_access() {
        let node = Node::ArrayAccess {
            target: Box::new(Node::ident("xs")),
            index: Box::new(Node::int(0)),
        };
        assert_eq!(emit(&node), "xs[0]");
    }

    #[test]
    fn record_access_joins_path() {
        let node = Node::RecordAccess {
            path: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(emit(&node), "a.b.c");
    }

    #[test]
    fn parenthesised_grouping() {
        let node = Node::Grouping {
            parens: true,
            children: vec![Node::ident("x"), Node::Op(Op::Add), Node::ident("y")],
            as_statement: false,
        };
        assert_eq!(emit(&node), "(x + y)");
    }

    #[test]
    fn statement_grouping_gets_newline() {
        let node = Node::Grouping {
            parens: false,
            children: vec![Node::ident("f")],
            as_statement: true,
        };
        assert_eq!(emit(&node), "f\n");
    }

    #[test]
    fn binop() {
        let node = Node::BinOp {
            left: Box::new(Node::ident("a")),
            op: Op::FAdd,
            right: Box::new(Node::float(2.0)),
        };
        assert_eq!(emit(&node), "a + 2.000000");
    }

    #[test]
    fn call_without_qualifier() {
        let node = Node::Call {
            module: None,
            function: Box::new(Node::ident("f")),
            arguments: vec![Node::int(1), Node::ident("x")],
        };
        assert_eq!(emit(&node), "f(1, x)");
    }

    #[test]
    fn call_with_qualifier() {
        let node = Node::Call {
            module: Some("__go_fmt".to_string()),
            function: Box::new(Node::ident("Println")),
            arguments: vec![Node::string("hello")],
        };
        assert_eq!(emit(&node), "__go_fmt.Println(\"hello\")");
    }

    #[test]
    fn empty_qualifier_is_ignored() {
        let node = Node::Call {
            module: Some(String::new()),
            function: Box::new(Node::ident("f")),
            arguments: vec![],
        };
        assert_eq!(emit(&node), "f()");
    }
}
