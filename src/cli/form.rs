// ============================================================
// Layer 1 — Form Renderer
// ============================================================
// Renders the fields of a disease form on a terminal and
// collects raw values. One operation per widget kind:
//
//   text_input   — free text
//   number_input — bounded number (whole or decimal)
//   slider       — bounded number in fixed steps
//   select       — numbered option list, pick by number or label
//
// A blank answer keeps the widget default. An answer outside
// the widget's domain is reported and asked again.
//
// Generic over BufRead/Write so tests can drive it with a
// Cursor instead of stdin.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use crate::data::schema;
use crate::domain::disease::DiseaseCase;
use crate::domain::field::{FieldDescriptor, FormInput, RawValue, Widget};

pub struct FormRenderer<R, W> {
    input:  R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> FormRenderer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, closed: false }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// True once a read has hit the end of input.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Read one trimmed line. `None` once input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for every field of `case` in schema order.
    pub fn render_form(&mut self, case: DiseaseCase) -> Result<FormInput> {
        writeln!(self.output, "\n{}", case.form_heading())?;
        let mut form = FormInput::new();
        for field in schema::fields(case) {
            let value = self.render(field)?;
            form.insert(field.key, value);
        }
        Ok(form)
    }

    /// Dispatch on the widget kind.
    pub fn render(&mut self, field: &FieldDescriptor) -> Result<RawValue> {
        match field.widget {
            Widget::Text { .. }   => self.text_input(field),
            Widget::Number { .. } => self.number_input(field),
            Widget::Slider { .. } => self.slider(field),
            Widget::Select { .. } => self.select(field),
        }
    }

    pub fn text_input(&mut self, field: &FieldDescriptor) -> Result<RawValue> {
        self.prompt(field, "", |raw| field.parse(raw))
    }

    pub fn number_input(&mut self, field: &FieldDescriptor) -> Result<RawValue> {
        let hint = format!("[{}] ", field.widget.domain());
        self.prompt(field, &hint, |raw| field.parse(raw))
    }

    pub fn slider(&mut self, field: &FieldDescriptor) -> Result<RawValue> {
        let hint = format!("[{}] ", field.widget.domain());
        self.prompt(field, &hint, |raw| field.parse(raw))
    }

    pub fn select(&mut self, field: &FieldDescriptor) -> Result<RawValue> {
        let Widget::Select { options } = field.widget else {
            bail!("{} is not a select field", field.key);
        };
        for (i, choice) in options.iter().enumerate() {
            writeln!(self.output, "    {}) {}", i + 1, choice.label)?;
        }
        self.prompt(field, "", |raw| match raw.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => {
                Ok(RawValue::Choice(options[n - 1].label.to_string()))
            }
            _ => field.parse(raw),
        })
    }

    /// Shared prompt loop: show label and default, read, validate, repeat.
    fn prompt<F>(&mut self, field: &FieldDescriptor, hint: &str, parse: F) -> Result<RawValue>
    where
        F: Fn(&str) -> Result<RawValue>,
    {
        let default = field.default_value();
        loop {
            write!(
                self.output,
                "  {} ({}) {}(default {}): ",
                field.label, field.help, hint, default
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                bail!("input closed while reading '{}'", field.key);
            };
            if line.is_empty() {
                return Ok(default);
            }
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "  ! {e}")?,
            }
        }
    }
}
