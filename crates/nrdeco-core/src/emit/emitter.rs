//! Core emitter struct and main emit logic.

use crate::model::{File, Interface, Method};

use super::template::{TEMPLATE, Template, fill};

/// Go emitter for a finished generation model.
pub struct Emitter<'a> {
    file: &'a File,
    template: &'static Template,
    /// Output buffer
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(file: &'a File) -> Self {
        Self {
            file,
            template: &TEMPLATE,
            output: String::new(),
        }
    }

    /// Emit the whole generated file.
    pub fn emit(mut self) -> String {
        self.emit_header();
        let file = self.file;
        for iface in &file.interfaces {
            self.emit_interface(iface);
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn emit_header(&mut self) {
        let imports = self
            .file
            .import_paths()
            .iter()
            .map(|path| format!("\t\"{path}\""))
            .collect::<Vec<_>>()
            .join("\n");
        self.output.push_str(&fill(
            self.template.file,
            &[
                ("version", self.file.version.as_str()),
                ("package", self.file.package_name.as_str()),
                ("imports", imports.as_str()),
            ],
        ));
    }

    fn emit_interface(&mut self, iface: &Interface) {
        let embedded = match (&self.file.original_package_name, self.file.differs_in_dest) {
            (Some(pkg), true) => format!("{}.{}", pkg, iface.name),
            _ => iface.name.clone(),
        };
        self.output.push_str(&fill(
            self.template.interface,
            &[
                ("interface", iface.name.as_str()),
                ("embedded", embedded.as_str()),
            ],
        ));
        for method in &iface.methods {
            self.emit_method(iface, method);
        }
    }

    fn emit_method(&mut self, iface: &Interface, method: &Method) {
        let section = if method.traced {
            self.template.traced
        } else {
            self.template.forward
        };
        let ret = if method.returns.0.is_empty() { "" } else { "return " };
        let signature = method.signature();
        let call = method.call();
        self.output.push_str(&fill(
            section,
            &[
                ("interface", iface.name.as_str()),
                ("method", method.name.as_str()),
                ("signature", signature.as_str()),
                ("call", call.as_str()),
                ("return", ret),
            ],
        ));
    }
}
