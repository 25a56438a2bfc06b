use anyhow::{bail, Context, Result};
use mirror_codegen::{FieldDescriptor, KnownRecords, Mode, Options, Record};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

const SCHEMA_FILE_VERSION: u32 = 1;

/// A TOML file declaring the records to generate mirrors for
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Schema file format version
    version: u32,

    /// Path generated code reaches runtime helpers through
    #[serde(default)]
    pub support_path: Option<String>,

    /// Records, in generation order
    #[serde(default)]
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    pub name: String,

    /// `readonly` or `observable`
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default = "default_visibility")]
    pub visibility: String,

    /// Extra derives for the mirror
    #[serde(default)]
    pub derive: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    /// Declared type, e.g. `List<Person>`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_persisted")]
    pub persisted: bool,
}

fn default_visibility() -> String {
    "pub".to_string()
}

fn default_persisted() -> bool {
    true
}

impl SchemaFile {
    /// Load a schema file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read schema file `{}`", path.display()))?;

        contents
            .parse()
            .with_context(|| format!("invalid schema file `{}`", path.display()))
    }

    /// Codegen options, honoring `support_path` when set
    pub fn options(&self) -> Result<Options> {
        let mut options = Options::new();

        if let Some(support_path) = &self.support_path {
            let path = syn::parse_str(support_path)
                .with_context(|| format!("invalid support path `{support_path}`"))?;
            options = options.support(path);
        }

        Ok(options)
    }

    /// Names of every declared record
    pub fn known_records(&self) -> KnownRecords {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    /// Converts every entry into a codegen record. `mode`, when given,
    /// replaces each record's own mode.
    pub fn to_records(&self, mode: Option<Mode>) -> Result<Vec<Record>> {
        self.records
            .iter()
            .map(|entry| {
                entry
                    .to_record(mode)
                    .with_context(|| format!("record `{}`", entry.name))
            })
            .collect()
    }
}

impl RecordEntry {
    fn to_record(&self, mode_override: Option<Mode>) -> Result<Record> {
        let mut record = Record::new(parse_ident(&self.name)?);

        record.mode = match (mode_override, &self.mode) {
            (Some(mode), _) => mode,
            (None, Some(mode)) => mode.parse()?,
            (None, None) => Mode::default(),
        };

        record.vis = syn::parse_str(&self.visibility)
            .with_context(|| format!("invalid visibility `{}`", self.visibility))?;

        for derive in &self.derive {
            let path = syn::parse_str(derive)
                .with_context(|| format!("invalid derive `{derive}`"))?;
            record.derives.push(path);
        }

        let mut names = HashSet::new();

        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                bail!("duplicate field `{}`", field.name);
            }
        }

        for field in self.fields.iter().filter(|field| field.persisted) {
            let ident = parse_ident(&field.name)?;
            let ty = rewrite_self(&field.ty, &self.name);
            record = record.field(FieldDescriptor::new(ident, ty));
        }

        Ok(record)
    }
}

/// Replaces every `Self` in a declared type with the record's name.
fn rewrite_self(ty: &str, name: &str) -> String {
    let is_word = |ch: char| ch == '_' || ch.is_alphanumeric();
    let mut out = String::with_capacity(ty.len());
    let mut rest = ty;

    while let Some(start) = rest.find(is_word) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let end = rest.find(|ch: char| !is_word(ch)).unwrap_or(rest.len());
        let word = &rest[..end];
        out.push_str(if word == "Self" { name } else { word });
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}

fn parse_ident(name: &str) -> Result<syn::Ident> {
    syn::parse_str(name).with_context(|| format!("`{name}` is not a valid identifier"))
}

impl FromStr for SchemaFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(s)?;

        // Validate version
        if file.version != SCHEMA_FILE_VERSION {
            bail!(
                "Unsupported schema file version: {}. Expected version {}",
                file.version,
                SCHEMA_FILE_VERSION
            );
        }

        Ok(file)
    }
}
