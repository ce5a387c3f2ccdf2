use tracing::debug;

use super::mapping::{is_scalar, map_field_type};
use super::scan::find_model;
use super::types::{
    Field, FieldDecl, LineClass, ModelParseResult, RelationField, RelationKind, SkipReason,
};
use crate::error::GenerateError;

/// Field names that switch on audit-field handling in the templates.
pub const AUDIT_FIELD_NAMES: &[&str] = &["createdBy", "createdById"];

/// Classify one declaration line.
///
/// Trailing `//` comments are stripped first. Lines with fewer than two
/// tokens are tolerated as [`SkipReason::Malformed`] rather than rejected.
#[must_use]
pub fn classify_line(raw: &str) -> LineClass {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineClass::Skip(SkipReason::Blank);
    }
    let code = match trimmed.find("//") {
        Some(idx) => trimmed[..idx].trim(),
        None => trimmed,
    };
    if code.is_empty() {
        return LineClass::Skip(SkipReason::Comment);
    }
    if code.starts_with("@@") {
        return LineClass::Skip(SkipReason::Directive);
    }

    let mut tokens = code.split_whitespace();
    let (Some(name), Some(raw_type)) = (tokens.next(), tokens.next()) else {
        return LineClass::Skip(SkipReason::Malformed);
    };

    let is_optional = raw_type.ends_with('?');
    let is_array = raw_type.contains("[]");
    let declared_type = raw_type.replacen('?', "", 1).replacen("[]", "", 1);

    LineClass::Field(FieldDecl {
        name: name.to_string(),
        declared_type,
        is_optional,
        is_array,
    })
}

/// Split a block body into declarations: one per line, or per `;` within a
/// line. Comment-only lines are kept whole so they classify as comments.
fn declarations(body: &str) -> impl Iterator<Item = &str> {
    body.lines().flat_map(|line| {
        let code = line.find("//").map_or(line, |idx| &line[..idx]);
        if code.contains(';') {
            code.split(';').collect::<Vec<_>>()
        } else {
            vec![line]
        }
    })
}

/// Parse one model's fields out of the schema source.
///
/// # Errors
///
/// Returns [`GenerateError::ModelNotFound`] when no `model <name> {` block
/// exists in `source`.
pub fn parse_model(model_name: &str, source: &str) -> Result<ModelParseResult, GenerateError> {
    let block = find_model(source, model_name).ok_or_else(|| GenerateError::ModelNotFound {
        model: model_name.to_string(),
    })?;

    let mut result = ModelParseResult::default();
    for line in declarations(block.body) {
        let decl = match classify_line(line) {
            LineClass::Field(decl) => decl,
            LineClass::Skip(SkipReason::Blank) => continue,
            LineClass::Skip(reason) => {
                debug!(model = model_name, ?reason, line = line.trim(), "skipping line");
                continue;
            }
        };

        if AUDIT_FIELD_NAMES.contains(&decl.name.as_str()) {
            result.has_created_by = true;
        }

        if !is_scalar(&decl.declared_type) {
            let relation = RelationField {
                kind: RelationKind::from_array(decl.is_array),
                name: decl.name,
                target: decl.declared_type,
            };
            debug!(
                model = model_name,
                field = %relation.name,
                target = %relation.target,
                kind = %relation.kind,
                "dropping relation field"
            );
            result.relations.push(relation);
            continue;
        }

        let mapped = map_field_type(
            &decl.declared_type,
            decl.is_optional,
            decl.is_array,
            &decl.name,
        );
        result.fields.push(Field {
            name: decl.name,
            declared_type: decl.declared_type,
            target_type: mapped.target,
            is_optional: decl.is_optional,
            is_array: decl.is_array,
            validators: mapped.validators,
        });
    }

    Ok(result)
}
