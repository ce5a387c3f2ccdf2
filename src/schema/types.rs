use super::mapping::{TargetType, Validator};

/// Cardinality of a relational field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// List-marked reference (`posts Post[]`)
    OneToMany,
    /// Single reference (`author User`)
    ManyToOne,
}

impl RelationKind {
    pub const fn from_array(is_array: bool) -> Self {
        if is_array {
            RelationKind::OneToMany
        } else {
            RelationKind::ManyToOne
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::OneToMany => write!(f, "one-to-many"),
            RelationKind::ManyToOne => write!(f, "many-to-one"),
        }
    }
}

/// One scalar attribute of a model.
///
/// Relational declarations never become a `Field`; they are kept apart as
/// [`RelationField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as declared
    pub name: String,
    /// Raw type token without `?` / `[]` (e.g. `Int`, `DateTime`)
    pub declared_type: String,
    /// Type emitted in generated TypeScript
    pub target_type: TargetType,
    /// Declared with a trailing `?`
    pub is_optional: bool,
    /// Declared with `[]`
    pub is_array: bool,
    /// Validation decorators; `IsOptional` first when `is_optional`
    pub validators: Vec<Validator>,
}

impl Field {
    /// TypeScript type including the list suffix, e.g. `number[]`.
    #[must_use]
    pub fn ts_type(&self) -> String {
        self.target_type.render(self.is_array)
    }
}

/// A declaration whose type references another model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationField {
    pub name: String,
    /// Referenced model name
    pub target: String,
    pub kind: RelationKind,
}

/// Parser output for one model. Built fresh for every generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelParseResult {
    /// Scalar fields in declaration order
    pub fields: Vec<Field>,
    /// Relations seen while parsing. Not rendered; kept for diagnostics.
    pub relations: Vec<RelationField>,
    /// A field named `createdBy` or `createdById` exists
    pub has_created_by: bool,
}

impl ModelParseResult {
    /// Mapped type of the scalar `id` field, if declared.
    #[must_use]
    pub fn id_type(&self) -> Option<TargetType> {
        self.fields
            .iter()
            .find(|f| f.name == "id")
            .map(|f| f.target_type)
    }

    /// The audit field when it is a relation rather than a scalar key.
    #[must_use]
    pub fn audit_relation(&self) -> Option<&RelationField> {
        self.relations
            .iter()
            .find(|r| super::parse::AUDIT_FIELD_NAMES.contains(&r.name.as_str()))
    }
}

/// A `model <Name> { ... }` block located by [`super::scan_models`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelBlock<'a> {
    pub name: &'a str,
    /// Text between the braces
    pub body: &'a str,
}

/// Tokens of a field declaration before type mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub declared_type: String,
    pub is_optional: bool,
    pub is_array: bool,
}

/// Why a line inside a model block produced no field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    /// Block attribute such as `@@id([a, b])`
    Directive,
    /// Fewer than two tokens
    Malformed,
}

/// Result of classifying one declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Field(FieldDecl),
    Skip(SkipReason),
}
