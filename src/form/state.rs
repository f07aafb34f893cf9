use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    BirthDate,
    BirthTime,
    BirthCity,
    BirthDistrict,
    Email,
    Message,
}

impl FormField {
    /// Fields that must be non-empty for a submission to go through.
    pub const REQUIRED: [FormField; 5] = [
        FormField::BirthDate,
        FormField::BirthTime,
        FormField::BirthCity,
        FormField::BirthDistrict,
        FormField::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::BirthDate => "birthDate",
            FormField::BirthTime => "birthTime",
            FormField::BirthCity => "birthCity",
            FormField::BirthDistrict => "birthDistrict",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    /// Accepts both the record key (`birthDate`) and the short console name (`date`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" | "birthDate" => Ok(FormField::BirthDate),
            "time" | "birthTime" => Ok(FormField::BirthTime),
            "city" | "birthCity" => Ok(FormField::BirthCity),
            "district" | "birthDistrict" => Ok(FormField::BirthDistrict),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(format!("{} is not a form field.", other)),
        }
    }
}

/// Current values of every form field. Empty string means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub birth_date: String,
    pub birth_time: String,
    pub birth_city: String,
    pub birth_district: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        self.slot(field)
    }

    pub fn is_empty(&self) -> bool {
        *self == FormState::default()
    }

    pub(crate) fn set(&mut self, field: FormField, value: String) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: FormField) -> &String {
        match field {
            FormField::BirthDate => &self.birth_date,
            FormField::BirthTime => &self.birth_time,
            FormField::BirthCity => &self.birth_city,
            FormField::BirthDistrict => &self.birth_district,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::BirthDate => &mut self.birth_date,
            FormField::BirthTime => &mut self.birth_time,
            FormField::BirthCity => &mut self.birth_city,
            FormField::BirthDistrict => &mut self.birth_district,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}
