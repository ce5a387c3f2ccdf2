use std::collections::BTreeSet;

use super::naming::{to_class_name, to_file_name, to_kebab_case};
use crate::config::GeneratorConfig;
use crate::schema::{Field, ModelParseResult, TargetType, Validator};

/// Fields the database or the service fills in; they never appear in DTOs.
pub const SERVER_MANAGED_FIELDS: &[&str] = &["id", "createdAt", "updatedAt"];

/// Field data in the shape the templates print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Property name
    pub name: String,
    /// TypeScript type (e.g. `string`, `number[]`)
    pub ts_type: String,
    /// Rendered with `?:`
    pub is_optional: bool,
    /// class-validator decorators in application order
    pub decorators: Vec<String>,
}

impl From<&Field> for FieldView {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            ts_type: field.ts_type(),
            is_optional: field.is_optional,
            decorators: field.validators.iter().map(Validator::decorator).collect(),
        }
    }
}

/// Everything a template needs for one model.
///
/// Type mapping, relation filtering, audit wiring and route guarding are all
/// decided here; the templates only substitute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    /// PascalCase class prefix (`BlogPost`)
    pub class_name: String,
    /// camelCase stem (`blogPost`)
    pub file_name: String,
    /// kebab-case folder and file prefix (`blog-post`)
    pub folder_name: String,
    /// All scalar fields in declaration order
    pub fields: Vec<FieldView>,
    /// Scalar fields accepted from clients
    pub dto_fields: Vec<FieldView>,
    /// Sorted decorator names imported by the create DTO
    pub validator_imports: Vec<String>,
    /// Model carries `createdBy` / `createdById`
    pub has_created_by: bool,
    /// Prisma `data` entry that stamps the requesting user, empty without audit fields
    pub audit_assignment: String,
    /// TypeScript type of the requesting user's id as the audit field stores it
    pub audit_key_ts_type: String,
    /// Mutation endpoints are guarded
    pub is_protected: bool,
    /// TypeScript type of the `id` route parameter
    pub id_ts_type: String,
    /// `id` is parsed with `ParseIntPipe`
    pub id_is_numeric: bool,
}

impl GenerationContext {
    /// `audit_target_id` is the id type of the model a `createdBy` relation
    /// points at; it is only consulted when there is no scalar audit key.
    pub fn new(
        model_name: &str,
        parsed: &ModelParseResult,
        audit_target_id: Option<TargetType>,
        config: &GeneratorConfig,
    ) -> Self {
        let class_name = to_class_name(model_name);
        let is_protected = config.is_protected(&class_name);

        let fields: Vec<FieldView> = parsed.fields.iter().map(FieldView::from).collect();
        let dto_fields: Vec<FieldView> = parsed
            .fields
            .iter()
            .filter(|f| !SERVER_MANAGED_FIELDS.contains(&f.name.as_str()))
            .filter(|f| !(parsed.has_created_by && is_audit_field(&f.name)))
            .map(FieldView::from)
            .collect();

        let validator_imports = parsed
            .fields
            .iter()
            .filter(|f| dto_fields.iter().any(|d| d.name == f.name))
            .flat_map(|f| f.validators.iter().map(|v| v.kind.name().to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let id_is_numeric = parsed.id_type().map_or(true, |t| t == TargetType::Number);
        let id_ts_type = if id_is_numeric {
            "number".to_string()
        } else {
            "string".to_string()
        };

        Self {
            file_name: to_file_name(model_name),
            folder_name: to_kebab_case(model_name),
            class_name,
            fields,
            dto_fields,
            validator_imports,
            has_created_by: parsed.has_created_by,
            audit_assignment: audit_assignment(parsed),
            audit_key_ts_type: audit_key_ts_type(parsed, audit_target_id),
            is_protected,
            id_ts_type,
            id_is_numeric,
        }
    }
}

fn is_audit_field(name: &str) -> bool {
    crate::schema::AUDIT_FIELD_NAMES.contains(&name)
}

/// How the service stamps the creating user.
///
/// A scalar foreign key is assigned directly; a bare `createdBy` relation is
/// connected by id.
fn audit_assignment(parsed: &ModelParseResult) -> String {
    if !parsed.has_created_by {
        return String::new();
    }
    if let Some(scalar) = parsed.fields.iter().find(|f| is_audit_field(&f.name)) {
        return format!("{}: userId", scalar.name);
    }
    "createdBy: { connect: { id: userId } }".to_string()
}

/// Type of the user id handed to `create`: the scalar key's own type, else
/// the referenced model's id type. Numeric when neither is known.
fn audit_key_ts_type(parsed: &ModelParseResult, audit_target_id: Option<TargetType>) -> String {
    match parsed.fields.iter().find(|f| is_audit_field(&f.name)) {
        Some(scalar) => scalar.target_type.as_ts().to_string(),
        None => audit_target_id
            .unwrap_or(TargetType::Number)
            .as_ts()
            .to_string(),
    }
}
