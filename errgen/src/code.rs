use crate::{ErrorDef, Model, Result};
use std::fmt::Write;

const HEADER: &str = "// Code generated by go tool eg; DO NOT EDIT.";

const ERROR_TYPE: &str = r#"type Error struct {
	Status  int    `json:"-"`
	Code    int    `json:"code"`
	Message string `json:"message"`
	Detail  string `json:"detail"`
}"#;

const ERROR_METHODS: &str = r#"func (err *Error) Error() string {
	return err.Message
}

// WithDetail Clone a new Error and set detail for it
func (err *Error) WithDetail(detail string) *Error {
	return &Error{
		Status:  err.Status,
		Code:    err.Code,
		Message: err.Message,
		Detail:  detail,
	}
}

// WithDetailf Clone a new Error and set detail for it
func (err *Error) WithDetailf(format string, detail ...any) *Error {
	return &Error{
		Status:  err.Status,
		Code:    err.Code,
		Message: err.Message,
		Detail:  fmt.Sprintf(format, detail...),
	}
}

func (err *Error) Is(e error) bool {
	var temp *Error
	if !errors.As(e, &temp) {
		return false
	}
	return err.Code == temp.Code
}"#;

const STD_WRAPPERS: &str = r#"// Is a wrapper of built-in errors.Is
func Is(err, target error) bool {
	return errors.Is(err, target)
}

// As a wrapper of built-in errors.As
func As(err error, target any) bool {
	return errors.As(err, target)
}

// New a wrapper of built-in errors.New
func New(text string) error {
	return errors.New(text)
}"#;

/// Renders the model as a Go source file declaring an `Error` type and one
/// package-level variable per error definition.
///
/// Error names are emitted verbatim as Go identifiers.
pub fn render_go(model: &Model) -> Result<String> {
    let mut file = GoFile::default();
    file.header(&model.package_name)?;
    file.block(ERROR_TYPE)?;
    file.instances(model.errors.iter())?;
    file.block(ERROR_METHODS)?;
    file.block(STD_WRAPPERS)?;
    Ok(file.finish())
}

#[derive(Default)]
struct GoFile {
    out: String,
}

impl GoFile {
    fn header(&mut self, package_name: &str) -> std::fmt::Result {
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out)?;
        writeln!(self.out, "package {package_name}")?;
        writeln!(self.out)?;
        writeln!(self.out, "import (")?;
        writeln!(self.out, "\t\"errors\"")?;
        writeln!(self.out, "\t\"fmt\"")?;
        writeln!(self.out, ")")
    }

    fn block(&mut self, text: &str) -> std::fmt::Result {
        writeln!(self.out)?;
        writeln!(self.out, "{text}")
    }

    fn instances<'a>(
        &mut self,
        errors: impl Iterator<Item = (&'a str, &'a ErrorDef)>,
    ) -> std::fmt::Result {
        writeln!(self.out)?;
        writeln!(self.out, "var (")?;
        for (name, def) in errors {
            writeln!(self.out, "\t{name} = &Error{{")?;
            writeln!(self.out, "\t\tCode:    {},", def.code)?;
            writeln!(self.out, "\t\tStatus:  {},", def.status)?;
            writeln!(self.out, "\t\tMessage: {},", go_quote(&def.message))?;
            writeln!(self.out, "\t}}")?;
        }
        writeln!(self.out, ")")
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Quotes `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
