//! Type declaration emission: records, variants, and extern imports.
//!
//! Records keep their shape as Go structs with title-cased (exported)
//! fields. Variants erase to a uniform struct holding a constructor tag
//! and an `interface{}` field slice, so every constructor of every variant
//! shares one runtime encoding.

use twine_ast::{Node, VariantId};

use super::{indent, Emitter};
use crate::error::EmitError;
use crate::imports::{alias_for_path, has_import_path, import_path, type_from_import};

/// Title-case a field name: first codepoint upper-cased, rest unchanged.
///
/// Go only exports fields whose name starts with an upper-case letter.
/// This is the single point an alternate backend would substitute.
pub(crate) fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Emitter<'_> {
    pub(crate) fn emit_record_type(
        &mut self,
        name: &str,
        fields: &[Node],
    ) -> Result<String, EmitError> {
        let mut inner = String::new();
        for field in fields {
            inner.push_str(&self.emit_node(field)?);
        }
        Ok(format!("type {} struct {{\n{}}}\n\n", name, indent(&inner)))
    }

    pub(crate) fn emit_record_field(
        &mut self,
        name: &str,
        ty: &Node,
    ) -> Result<String, EmitError> {
        Ok(format!("{} {}\n", title_case(name), self.emit_node(ty)?))
    }

    /// A record literal. Fields arrive in declared order, so output is
    /// deterministic.
    pub(crate) fn emit_record_instance(
        &mut self,
        name: &str,
        fields: &[(String, Node)],
    ) -> Result<String, EmitError> {
        let mut parts = Vec::with_capacity(fields.len());
        for (field, value) in fields {
            parts.push(format!("{}: {}", title_case(field), self.emit_node(value)?));
        }
        Ok(format!("{}{{{}}}\n", name, parts.join(", ")))
    }

    /// The uniform erased variant encoding.
    pub(crate) fn emit_variant(&self, id: VariantId) -> String {
        let def = self.module.variant(id);
        format!(
            "type {} struct {{\n\tConstructor uint8\n\tFields []interface{{}}\n}}\n\n",
            def.name
        )
    }

    pub(crate) fn emit_variant_instance(
        &mut self,
        name: &str,
        constructor: u8,
        arguments: &[Node],
    ) -> Result<String, EmitError> {
        let mut out = format!("{name}{{{constructor}");
        if arguments.is_empty() {
            out.push_str(", nil");
        } else {
            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                args.push(self.emit_node(argument)?);
            }
            out.push_str(", []interface{}{");
            out.push_str(&args.join(", "));
            out.push('}');
        }
        out.push_str("}\n");
        Ok(out)
    }

    /// An extern Go type bound to a local name.
    ///
    /// Builtins (bare references with no package path) need nothing. For
    /// path-qualified references the package import is declared once and
    /// the local name becomes a type alias through the package alias.
    pub(crate) fn emit_extern_record(
        &mut self,
        name: &str,
        import: &str,
    ) -> Result<String, EmitError> {
        // A leading `*` marks pointer-to-type; it belongs in the alias
        // declaration, never in the import path.
        let (pointer, reference) = match import.strip_prefix('*') {
            Some(rest) => ("*", rest),
            None => ("", import),
        };

        let path = import_path(reference);
        let bare = type_from_import(reference)?;
        if path == bare {
            return Ok(String::new());
        }

        let alias = alias_for_path(path);
        let mut out = String::new();
        if self.imports.insert(alias.clone()) {
            out.push_str(&format!("import {alias} \"{path}\"\n"));
        }
        out.push_str(&format!("type {name} = {pointer}{alias}.{bare}\n"));
        Ok(out)
    }

    /// An extern Go function. Only the aliased import line is emitted, and
    /// only once per package; call sites qualify the call with the alias.
    pub(crate) fn emit_extern_func(
        &mut self,
        name: &str,
        import: &str,
    ) -> Result<String, EmitError> {
        if !has_import_path(import) {
            return Ok(String::new());
        }

        let path = import_path(import);
        let alias = alias_for_path(path);
        if !self.imports.insert(alias.clone()) {
            return Ok(String::new());
        }

        // The import line itself is the only trace of the function, so the
        // local name counts as used from here on.
        self.used_variables.insert(name.to_string());
        Ok(format!("import {alias} \"{path}\"\n"))
    }
}
