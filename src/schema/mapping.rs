//! Declared schema type → TypeScript type and class-validator decorators.

/// Prisma primitives. Any other type token is a relation.
pub const SCALAR_TYPES: &[&str] = &[
    "String", "Int", "Float", "Boolean", "DateTime", "Json", "Bytes", "Decimal", "BigInt",
];

/// Check if a declared type is a scalar primitive.
#[must_use]
pub fn is_scalar(declared_type: &str) -> bool {
    SCALAR_TYPES.contains(&declared_type)
}

/// Target representation in generated TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    String,
    Number,
    Boolean,
    Date,
    /// Untyped JSON payload
    Any,
}

impl TargetType {
    #[must_use]
    pub const fn as_ts(self) -> &'static str {
        match self {
            TargetType::String => "string",
            TargetType::Number => "number",
            TargetType::Boolean => "boolean",
            TargetType::Date => "Date",
            TargetType::Any => "any",
        }
    }

    /// Render with an optional list suffix.
    #[must_use]
    pub fn render(self, is_array: bool) -> String {
        if is_array {
            format!("{}[]", self.as_ts())
        } else {
            self.as_ts().to_string()
        }
    }
}

/// class-validator decorator emitted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidatorKind {
    IsOptional,
    IsString,
    IsEmail,
    IsInt,
    IsNumber,
    IsBoolean,
    IsDate,
    IsObject,
}

impl ValidatorKind {
    /// Decorator identifier as imported from `class-validator`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValidatorKind::IsOptional => "IsOptional",
            ValidatorKind::IsString => "IsString",
            ValidatorKind::IsEmail => "IsEmail",
            ValidatorKind::IsInt => "IsInt",
            ValidatorKind::IsNumber => "IsNumber",
            ValidatorKind::IsBoolean => "IsBoolean",
            ValidatorKind::IsDate => "IsDate",
            ValidatorKind::IsObject => "IsObject",
        }
    }
}

/// One validation directive with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub kind: ValidatorKind,
    pub message: String,
}

impl Validator {
    fn new(kind: ValidatorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Decorator source text, e.g. `@IsInt({ message: 'Age must be an integer.' })`.
    ///
    /// `IsEmail` and `IsNumber` take their format options first, so the
    /// validation options go in the second argument.
    #[must_use]
    pub fn decorator(&self) -> String {
        let name = self.kind.name();
        let message = self.message.replace('\'', "\\'");
        match self.kind {
            ValidatorKind::IsOptional => format!("@{name}()"),
            ValidatorKind::IsEmail | ValidatorKind::IsNumber => {
                format!("@{name}({{}}, {{ message: '{message}' }})")
            }
            _ => format!("@{name}({{ message: '{message}' }})"),
        }
    }
}

/// Output of [`map_field_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub target: TargetType,
    pub is_array: bool,
    pub validators: Vec<Validator>,
}

impl MappedType {
    #[must_use]
    pub fn ts_type(&self) -> String {
        self.target.render(self.is_array)
    }
}

/// Field name with its first character upper-cased, used in messages.
#[must_use]
pub fn field_label(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Map a declared scalar type to its target type and validator list.
///
/// Never fails: unknown tokens (including `Bytes`, `Decimal` and `BigInt`)
/// fall back to `string` / `IsString`. Arrays only change the target type;
/// no per-element validator is added.
#[must_use]
pub fn map_field_type(
    declared_type: &str,
    is_optional: bool,
    is_array: bool,
    field_name: &str,
) -> MappedType {
    let label = field_label(field_name);
    let is_email_field = field_name.to_lowercase().contains("email");

    let (target, validator) = match declared_type {
        "String" if is_email_field => (
            TargetType::String,
            Validator::new(
                ValidatorKind::IsEmail,
                format!("{label} must be a valid email address."),
            ),
        ),
        "Int" => (
            TargetType::Number,
            Validator::new(ValidatorKind::IsInt, format!("{label} must be an integer.")),
        ),
        "Float" => (
            TargetType::Number,
            Validator::new(ValidatorKind::IsNumber, format!("{label} must be a float.")),
        ),
        "Boolean" => (
            TargetType::Boolean,
            Validator::new(
                ValidatorKind::IsBoolean,
                format!("{label} must be true or false."),
            ),
        ),
        "DateTime" => (
            TargetType::Date,
            Validator::new(ValidatorKind::IsDate, format!("{label} must be a date.")),
        ),
        "Json" => (
            TargetType::Any,
            Validator::new(ValidatorKind::IsObject, format!("{label} must be an object.")),
        ),
        _ => (
            TargetType::String,
            Validator::new(ValidatorKind::IsString, format!("{label} must be a string.")),
        ),
    };

    let mut validators = Vec::with_capacity(2);
    if is_optional {
        validators.push(Validator::new(
            ValidatorKind::IsOptional,
            format!("{label} is optional."),
        ));
    }
    validators.push(validator);

    MappedType {
        target,
        is_array,
        validators,
    }
}
