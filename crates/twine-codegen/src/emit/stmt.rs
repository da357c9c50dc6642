//! Statement emission: bindings, returns, and conditional lifting.
//!
//! Go rejects declared-but-unused variables, so bindings whose names were
//! never read lower to the blank identifier. Value-position conditionals
//! are lifted: the `if` statement assigns a temp variable synthesised by
//! inference, and the enclosing assignment consumes that temp.

use twine_ast::{Node, Ty};

use super::{indent, Emitter};
use crate::error::EmitError;

impl Emitter<'_> {
    /// Lower a binding or reassignment.
    ///
    /// The target must be an identifier or a tuple of identifiers; anything
    /// else means inference failed to normalise the assignment and the pass
    /// aborts. Declarations use `:=`, reassignments `=`; an all-blank
    /// target also takes `=`, since `:=` must introduce at least one new
    /// variable.
    pub(crate) fn emit_assignment(
        &mut self,
        left: &Node,
        right: &Node,
        update: bool,
    ) -> Result<String, EmitError> {
        let names = match left {
            Node::Ident(name) => vec![self.binding_name(name)],
            Node::Grouping { children, .. } => {
                let mut names = Vec::with_capacity(children.len());
                for child in children {
                    match child {
                        Node::Ident(name) => names.push(self.binding_name(name)),
                        other => {
                            return Err(EmitError::InvalidAssignmentTarget(
                                other.kind().to_string(),
                            ))
                        }
                    }
                }
                names
            }
            other => {
                return Err(EmitError::InvalidAssignmentTarget(
                    other.kind().to_string(),
                ))
            }
        };

        let all_blank = names.iter().all(|name| name == "_");
        let binding = if update || all_blank { " = " } else { " := " };
        let target = names.join(", ");

        let mut out = String::new();
        match right {
            // A value-position conditional declares and assigns its temp
            // variable first; the binding then reads the temp.
            Node::If { temp_var, .. } => {
                out.push_str(&self.emit_node(right)?);
                out.push('\n');
                out.push_str(&target);
                out.push_str(binding);
                out.push_str(temp_var);
            }
            _ => {
                out.push_str(&target);
                out.push_str(binding);
                out.push_str(&self.emit_node(right)?);
            }
        }
        out.push('\n');
        Ok(out)
    }

    /// Emit a conditional.
    ///
    /// A non-unit inferred type marks a value-position conditional: its
    /// temp variable is declared up front and each branch's trailing
    /// expression assigns it. Unit conditionals emit as bare statements.
    pub(crate) fn emit_if(
        &mut self,
        condition: &Node,
        then_body: &[Node],
        else_body: Option<&[Node]>,
        ty: &Ty,
        temp_var: &str,
    ) -> Result<String, EmitError> {
        let mut out = String::new();
        if !ty.is_unit() {
            out.push_str(&format!("var {} {}\n", temp_var, ty.name()));
        }

        out.push_str("\nif ");
        out.push_str(&self.emit_node(condition)?);
        out.push_str(" {\n");

        let mut then_text = String::new();
        for node in then_body {
            then_text.push_str(&self.emit_node(node)?);
        }
        out.push_str(&indent(&then_text));
        out.push('}');

        let Some(else_body) = else_body else {
            // An else-less conditional is necessarily unit-typed.
            out.push_str("\n\n");
            return Ok(out);
        };

        out.push_str(" else {\n");
        let mut else_text = String::new();
        for node in else_body {
            else_text.push_str(&self.emit_node(node)?);
        }
        out.push_str(&indent(&else_text));
        out.push_str("}\n");
        Ok(out)
    }

    /// A scalar return. Unit-typed returns vanish: the surface language
    /// ends every function body with an expression, but Go has no value to
    /// return for unit.
    pub(crate) fn emit_return(&mut self, value: &Node, ty: &Ty) -> Result<String, EmitError> {
        if ty.is_unit() {
            return Ok(String::new());
        }
        Ok(format!("\nreturn {}", self.emit_node(value)?))
    }

    /// A multi-value return.
    pub(crate) fn emit_return_tuple(&mut self, values: &[Node]) -> Result<String, EmitError> {
        let mut parts = Vec::with_capacity(values.len());
        for value in values {
            parts.push(self.emit_node(value)?);
        }
        Ok(format!("\nreturn {}", parts.join(", ")))
    }
}
