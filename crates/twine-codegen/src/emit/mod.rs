//! The Go emitter: state, node dispatch, and the module driver.
//!
//! Emission is syntax-directed: one `emit_*` method per node family, each
//! returning the text fragment for that node. The driver walks the module's
//! top-level declarations in order, concatenates the fragments, hoists
//! `import` lines to just below the package clause, and finally appends the
//! monomorphised type declarations registered on the module.

mod expr;
mod func;
mod stmt;
mod types;

use rustc_hash::{FxHashMap, FxHashSet};
use twine_ast::{Module, Node, Ty};

use crate::error::EmitError;

/// Whether emission is at module top level or inside a function body.
/// Nested functions emit as closures bound with `:=`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Function,
}

/// The Go emitter.
///
/// Holds the pass-scoped state threaded through every emission. The type
/// environment is swapped for a function's captured environment while its
/// body is emitted; `used_variables` and `imports` are deliberately *not*
/// part of that swap, so usage information and declared package aliases
/// accumulate across nested emissions, as the final output requires.
pub struct Emitter<'m> {
    module: &'m Module,
    /// Inferred types by name. Consulted for captured environments of
    /// nested functions.
    env: FxHashMap<String, Ty>,
    /// Names read at least once after binding. Bindings absent from this
    /// set lower to the blank identifier.
    used_variables: FxHashSet<String>,
    /// Package aliases already declared with an `import` line.
    imports: FxHashSet<String>,
    scope: Scope,
}

impl<'m> Emitter<'m> {
    /// Create an emitter over `module` with the inference results: the
    /// top-level type environment and the used-variable set.
    pub fn new(
        module: &'m Module,
        env: FxHashMap<String, Ty>,
        used_variables: FxHashSet<String>,
    ) -> Self {
        Emitter {
            module,
            env,
            used_variables,
            imports: FxHashSet::default(),
            scope: Scope::TopLevel,
        }
    }

    /// Emit the complete Go module.
    pub fn emit_module(&mut self) -> Result<String, EmitError> {
        let mut out = format!("package {}\n\n", self.module.name.to_lowercase());
        for declaration in &self.module.declarations {
            out.push_str(&self.emit_node(declaration)?);
        }

        let mut out = hoist_imports(&out);
        for concrete in &self.module.concrete_types {
            out.push_str(&self.emit_node(concrete)?);
        }
        Ok(out)
    }

    /// Emit one node, dispatching over the closed node set.
    pub(crate) fn emit_node(&mut self, node: &Node) -> Result<String, EmitError> {
        match node {
            Node::Basic(lit) => Ok(expr::emit_basic(lit)),
            Node::Ident(name) => Ok(name.clone()),
            Node::Op(op) => Ok(expr::emit_operator(*op)),
            Node::Comment(text) => Ok(format!("//{text}\n")),
            Node::Array { ty, elements } => self.emit_array(ty, elements),
            Node::ArrayType { subtype } => self.emit_array_type(subtype),
            Node::ArrayAccess { target, index } => self.emit_array_access(target, index),
            Node::RecordAccess { path } => Ok(path.join(".")),
            Node::Grouping {
                parens,
                children,
                as_statement,
            } => self.emit_grouping(*parens, children, *as_statement),
            Node::Assignment {
                left,
                right,
                update,
            } => self.emit_assignment(left, right, *update),
            Node::If {
                condition,
                then_body,
                else_body,
                ty,
                temp_var,
            } => self.emit_if(condition, then_body, else_body.as_deref(), ty, temp_var),
            Node::BinOp { left, op, right } => self.emit_binop(left, *op, right),
            Node::Call {
                module,
                function,
                arguments,
            } => self.emit_call(module.as_deref(), function, arguments),
            Node::Return { value, ty } => self.emit_return(value, ty),
            Node::ReturnTuple { values } => self.emit_return_tuple(values),
            Node::Func {
                name,
                params,
                body,
                ty,
            } => self.emit_func(name, params, body, ty),
            Node::AliasType { name } => Ok(format!("type {name} int32\n\n")),
            Node::RecordType { name, fields } => self.emit_record_type(name, fields),
            Node::RecordField { name, ty } => self.emit_record_field(name, ty),
            Node::RecordInstance { name, fields } => self.emit_record_instance(name, fields),
            Node::Variant(id) => Ok(self.emit_variant(*id)),
            Node::VariantConstructor { .. } => Ok(String::new()),
            Node::VariantInstance {
                name,
                constructor,
                arguments,
            } => self.emit_variant_instance(name, *constructor, arguments),
            Node::ExternRecordType { name, import } => self.emit_extern_record(name, import),
            Node::ExternFunc { name, import } => self.emit_extern_func(name, import),
        }
    }

    /// The emitted name for a binding: the name itself if it is ever read,
    /// the blank identifier otherwise.
    pub(crate) fn binding_name(&self, name: &str) -> String {
        if self.used_variables.contains(name) {
            name.to_string()
        } else {
            "_".to_string()
        }
    }
}

/// Hoist every `import`-prefixed line to just below the package clause.
///
/// Extern emitters fire wherever their declaration sits, but Go requires
/// imports above type and function declarations. Lines are moved, not
/// copied, preserving first-seen order; the pass is idempotent, so running
/// it over already-hoisted text changes nothing.
pub fn hoist_imports(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();

    let mut import_lines = Vec::new();
    let mut rest = Vec::with_capacity(lines.len());
    for line in lines {
        if line.starts_with("import") {
            import_lines.push(line);
        } else {
            rest.push(line);
        }
    }
    if import_lines.is_empty() {
        return source.to_string();
    }

    // Insert below the package clause and its blank line.
    let at = rest.len().min(2);
    rest.splice(at..at, import_lines);
    rest.join("\n")
}

/// Indent every line of `body` by one tab. The blank line produced by a
/// trailing newline is indented too, matching the block layout of the rest
/// of the emitted file.
pub(crate) fn indent(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for line in body.split('\n') {
        out.push('\t');
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter_for(module: &Module) -> Emitter<'_> {
        Emitter::new(module, FxHashMap::default(), FxHashSet::default())
    }

    #[test]
    fn package_clause_is_lowercased() {
        let module = Module::new("Main");
        let out = emitter_for(&module).emit_module().unwrap();
        assert_eq!(out, "package main\n\n");
    }

    #[test]
    fn declarations_emit_in_order() {
        let mut module = Module::new("Main");
        module.declarations.push(Node::Comment(" first".to_string()));
        module.declarations.push(Node::Comment(" second".to_string()));
        let out = emitter_for(&module).emit_module().unwrap();
        assert_eq!(out, "package main\n\n// first\n// second\n");
    }

    #[test]
    fn concrete_types_append_after_body() {
        let mut module = Module::new("Main");
        module.declarations.push(Node::Comment(" body".to_string()));
        module.concrete_types.push(Node::AliasType {
            name: "MaybeInt".to_string(),
        });
        let out = emitter_for(&module).emit_module().unwrap();
        assert_eq!(
            out,
            "package main\n\n// body\ntype MaybeInt int32\n\n"
        );
    }

    #[test]
    fn hoist_moves_imports_below_package_clause() {
        let source = "package main\n\nfunc f () {\n}\n\nimport __go_fmt \"fmt\"\n";
        let hoisted = hoist_imports(source);
        assert_eq!(
            hoisted,
            "package main\n\nimport __go_fmt \"fmt\"\nfunc f () {\n}\n\n"
        );
    }

    #[test]
    fn hoist_preserves_first_seen_order() {
        let source = "package main\n\nimport __go_fmt \"fmt\"\ntype T int32\nimport __go_os \"os\"\n";
        let hoisted = hoist_imports(source);
        let fmt_pos = hoisted.find("__go_fmt").unwrap();
        let os_pos = hoisted.find("__go_os").unwrap();
        assert!(fmt_pos < os_pos);
        assert!(hoisted.find("type T").unwrap() > os_pos);
    }

    #[test]
    fn hoist_is_idempotent() {
        let source = "package main\n\ntype T int32\nimport __go_fmt \"fmt\"\nfunc f () {\n}\n";
        let once = hoist_imports(source);
        let twice = hoist_imports(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn hoist_without_imports_is_identity() {
        let source = "package main\n\ntype T int32\n";
        assert_eq!(hoist_imports(source), source);
    }

    #[test]
    fn indent_adds_one_tab_per_line() {
        assert_eq!(indent("a\nb"), "\ta\n\tb\n");
        // The blank line a trailing newline produces is indented too.
        assert_eq!(indent("a\n"), "\ta\n\t\n");
    }

    #[test]
    fn binding_name_blanks_unused() {
        let module = Module::new("Main");
        let mut used = FxHashSet::default();
        used.insert("kept".to_string());
        let emitter = Emitter::new(&module, FxHashMap::default(), used);
        assert_eq!(emitter.binding_name("kept"), "kept");
        assert_eq!(emitter.binding_name("dropped"), "_");
    }
}
