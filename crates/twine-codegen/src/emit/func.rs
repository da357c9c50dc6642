//! Function emission: top-level definitions and nested closures.
//!
//! A function whose signature still mentions a type variable is not
//! concrete; it emits only a placeholder comment, and its monomorphised
//! instances are appended later from the module's concrete-type list.

use twine_ast::{Node, Ty};

use super::{indent, Emitter, Scope};
use crate::error::EmitError;

impl Emitter<'_> {
    pub(crate) fn emit_func(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Node],
        ty: &Ty,
    ) -> Result<String, EmitError> {
        // Inference decorates every function with a function type; anything
        // else means the definition is not yet concrete.
        let Ty::Fun(fn_ty) = ty else {
            return Ok(placeholder(name));
        };
        if fn_ty.types.iter().any(|t| t.name().starts_with('\'')) {
            return Ok(placeholder(name));
        }

        let mut out = String::new();
        match self.scope {
            // Inside another function the definition becomes a closure
            // bound to a local; the unused-binding rule applies to it.
            Scope::Function => {
                out.push_str(&self.binding_name(name));
                out.push_str(" := func (");
            }
            Scope::TopLevel => {
                out.push_str("func ");
                out.push_str(name);
                out.push_str(" (");
            }
        }

        let mut args = Vec::with_capacity(params.len());
        for (param, param_ty) in params.iter().zip(&fn_ty.types) {
            args.push(format!("{} {}", param, param_ty.name()));
        }
        out.push_str(&args.join(", "));
        out.push_str(") ");

        match fn_ty.types.last() {
            Some(ret) if !ret.is_unit() => {
                out.push_str(&ret.name());
                out.push_str(" {\n");
            }
            _ => out.push_str("{\n"),
        }

        // The body sees the environment captured at the definition site.
        // `used_variables` and `imports` stay on the emitter, shared with
        // the enclosing scope.
        let captured = match self.env.get(name) {
            Some(Ty::Fun(bound)) => bound.env.clone(),
            _ => fn_ty.env.clone(),
        };
        let saved_env = std::mem::replace(&mut self.env, captured);
        let saved_scope = std::mem::replace(&mut self.scope, Scope::Function);

        let mut inner = String::new();
        let mut failed = None;
        for node in body {
            match self.emit_node(node) {
                Ok(text) => inner.push_str(&text),
                Err(e) => {
                    failed = Some(e);
                    break;
                }
            }
        }

        self.env = saved_env;
        self.scope = saved_scope;
        if let Some(e) = failed {
            return Err(e);
        }

        out.push_str(&indent(&inner));
        out.push_str("}\n\n");
        Ok(out)
    }
}

fn placeholder(name: &str) -> String {
    format!("// func `{name}` not added, not concrete\n")
}
