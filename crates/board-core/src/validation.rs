//! Form input validation rules.
//!
//! [`validate`] checks a single [`Validatable`] field against its optional
//! rules. [`validate_project_input`] applies the board's rules for the three
//! fields of the "add project" form and returns the typed input on success.

/// The raw value of a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// A field value plus the rules it must satisfy.
///
/// Length rules only apply to text values and `min`/`max` only apply to
/// numeric values; a rule that does not apply is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// A text field with no rules.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// A numeric field with no rules.
    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min(mut self, n: f64) -> Self {
        self.min = Some(n);
        self
    }

    pub fn max(mut self, n: f64) -> Self {
        self.max = Some(n);
        self
    }
}

/// Returns `true` if every applicable rule passes.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.as_text().trim().is_empty();
    }

    if let FieldValue::Text(ref s) = input.value {
        let len = s.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && len >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && len <= max_length;
        }
    }

    if let FieldValue::Number(n) = input.value {
        if let Some(min) = input.min {
            is_valid = is_valid && n >= min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && n <= max;
        }
    }

    is_valid
}

/// Limits applied to the "add project" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRules {
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

/// Error type for rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be {max} characters or less")]
    TitleTooLong { max: usize },

    #[error("description is required and must be at least {min_length} characters")]
    DescriptionTooShort { min_length: usize },

    #[error("people must be a whole number between {min} and {max} (got '{value}')")]
    InvalidPeople { value: String, min: u32, max: u32 },
}

/// Validated form input, ready for [`crate::store::ProjectStore::add_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

/// Validates the raw strings of the "add project" form.
pub fn validate_project_input(
    title: &str,
    description: &str,
    people: &str,
    rules: &InputRules,
) -> Result<NewProject, ValidationError> {
    let mut title_check = Validatable::text(title).required();
    if let Some(max) = rules.title_max_length {
        title_check = title_check.max_length(max);
    }
    if !validate(&title_check) {
        return Err(match rules.title_max_length {
            Some(max) if !title.trim().is_empty() => ValidationError::TitleTooLong { max },
            _ => ValidationError::TitleRequired,
        });
    }

    let description_check = Validatable::text(description)
        .required()
        .min_length(rules.description_min_length);
    if !validate(&description_check) {
        return Err(ValidationError::DescriptionTooShort {
            min_length: rules.description_min_length,
        });
    }

    let invalid_people = || ValidationError::InvalidPeople {
        value: people.to_string(),
        min: rules.people_min,
        max: rules.people_max,
    };
    let count: f64 = people.trim().parse().map_err(|_| invalid_people())?;
    let people_check = Validatable::number(count)
        .required()
        .min(f64::from(rules.people_min))
        .max(f64::from(rules.people_max));
    if !validate(&people_check) || count.fract() != 0.0 {
        return Err(invalid_people());
    }

    Ok(NewProject {
        title: title.to_string(),
        description: description.to_string(),
        people_count: count as u32,
    })
}
