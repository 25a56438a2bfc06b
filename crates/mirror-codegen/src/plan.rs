mod field;
pub use field::{compile_field, FieldMapping};

use crate::schema::{ErrorSet, Mode, ModeConfig, Record};
use crate::{err, Error, Options, Resolve};

/// A record compiled against its mode: everything the assembler needs.
#[derive(Debug, Clone)]
pub struct Plan {
    /// The persistent record
    pub ident: syn::Ident,

    /// The generated mirror, e.g. `ReadonlyPerson`
    pub mirror_ident: syn::Ident,

    pub vis: syn::Visibility,

    pub mode: Mode,

    /// Extra derives requested for the mirror
    pub derives: Vec<syn::Path>,

    /// Path the generated code reaches runtime helpers through
    pub support: syn::Path,

    /// Field mappings, in schema order
    pub fields: Vec<FieldMapping>,
}

impl Plan {
    /// Compiles every field of `record`, failing on the first field that
    /// cannot be mapped.
    pub fn compile(
        record: &Record,
        resolver: &dyn Resolve,
        options: &Options,
    ) -> Result<Plan, Error> {
        let config = record.mode.config();
        let mut fields = Vec::with_capacity(record.fields.len());

        for field in &record.fields {
            let mapping = compile_field(field, &config, resolver, options)
                .map_err(|err| err.context(err!("field `{}`", field.ident)))
                .map_err(|err| err.context(err!("record `{}`", record.ident)))?;

            fields.push(mapping);
        }

        Ok(Plan::new(record, options, fields))
    }

    /// Compiles every field of `record`, reporting each failure at the span
    /// of the field that caused it.
    pub(crate) fn compile_all(
        record: &Record,
        resolver: &dyn Resolve,
        options: &Options,
    ) -> syn::Result<Plan> {
        let config = record.mode.config();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for field in &record.fields {
            match compile_field(field, &config, resolver, options) {
                Ok(mapping) => fields.push(mapping),
                Err(err) => errs.push_at(field.span, err),
            }
        }

        errs.finish()?;

        Ok(Plan::new(record, options, fields))
    }

    pub fn config(&self) -> ModeConfig {
        self.mode.config()
    }

    fn new(record: &Record, options: &Options, fields: Vec<FieldMapping>) -> Plan {
        let plan = Plan {
            ident: record.ident.clone(),
            mirror_ident: record.mirror_ident(),
            vis: record.vis.clone(),
            mode: record.mode,
            derives: record.derives.clone(),
            support: options.support.clone(),
            fields,
        };

        log::debug!(
            "compiled `{}` into `{}` ({} mode, {} fields)",
            plan.ident,
            plan.mirror_ident,
            plan.mode,
            plan.fields.len()
        );

        plan
    }
}
