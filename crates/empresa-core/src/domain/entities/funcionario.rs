//! Employee record.

use crate::domain::value_objects::{CalendarDate, Timestamp};
use crate::representation::{as_float, as_integer, as_text, first_truthy, present, text_or_null};
use crate::{KeyValue, TableRecord};
use serde_json::Value;
use std::fmt;

/// Address used when none is given.
pub const DEFAULT_ENDERECO: &str = "Macau-Rn";

/// Salary used when none is given.
pub const DEFAULT_SALARIO: f64 = 1518.01;

/// Sex marker used when none is given.
pub const DEFAULT_SEXO: &str = "f";

/// Employee of the company, identified by CPF.
#[derive(Debug, Clone, PartialEq)]
pub struct Funcionario {
    /// CPF (identifier).
    pub cpf: String,

    /// First name.
    pub pnome: String,

    /// Last name.
    pub unome: String,

    /// Date of birth.
    pub data_nasc: Option<CalendarDate>,

    /// Address.
    pub endereco: String,

    /// Monthly salary.
    pub salario: f64,

    /// Sex marker.
    pub sexo: String,

    /// CPF of the supervising employee.
    pub cpf_supervisor: Option<String>,

    /// Number of the department the employee works in.
    pub numero_departamento: Option<i64>,

    /// Creation timestamp.
    pub created_at: Option<Timestamp>,

    /// Last update timestamp.
    pub updated_at: Option<Timestamp>,
}

impl Funcionario {
    /// Creates an employee with default address, salary and sex marker.
    #[must_use]
    pub fn new(cpf: impl Into<String>, pnome: impl Into<String>, unome: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            pnome: pnome.into(),
            unome: unome.into(),
            data_nasc: None,
            endereco: DEFAULT_ENDERECO.to_string(),
            salario: DEFAULT_SALARIO,
            sexo: DEFAULT_SEXO.to_string(),
            cpf_supervisor: None,
            numero_departamento: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the department reference.
    #[must_use]
    pub const fn with_departamento(mut self, numero: i64) -> Self {
        self.numero_departamento = Some(numero);
        self
    }

    /// Sets the supervisor reference.
    #[must_use]
    pub fn with_supervisor(mut self, cpf: impl Into<String>) -> Self {
        self.cpf_supervisor = Some(cpf.into());
        self
    }

    /// Sets the birth date from ISO text.
    #[must_use]
    pub fn with_data_nasc(mut self, data_nasc: &str) -> Self {
        self.data_nasc = Some(CalendarDate::parse(data_nasc));
        self
    }

    /// Sets the salary.
    #[must_use]
    pub const fn with_salario(mut self, salario: f64) -> Self {
        self.salario = salario;
        self
    }

    /// Sets the address.
    #[must_use]
    pub fn with_endereco(mut self, endereco: impl Into<String>) -> Self {
        self.endereco = endereco.into();
        self
    }

    /// Sets the sex marker.
    #[must_use]
    pub fn with_sexo(mut self, sexo: impl Into<String>) -> Self {
        self.sexo = sexo.into();
        self
    }

    /// Returns first and last name joined by a space.
    #[must_use]
    pub fn nome_completo(&self) -> String {
        format!("{} {}", self.pnome, self.unome)
    }
}

impl TableRecord for Funcionario {
    fn to_representation(&self) -> KeyValue {
        let mut data = KeyValue::new();
        data.insert("cpf".into(), Value::String(self.cpf.clone()));
        data.insert("pnome".into(), Value::String(self.pnome.clone()));
        data.insert("unome".into(), Value::String(self.unome.clone()));
        data.insert("data_nasc".into(), self.data_nasc.as_ref().map_or(Value::Null, CalendarDate::to_value));
        data.insert("endereco".into(), Value::String(self.endereco.clone()));
        data.insert("salario".into(), Value::from(self.salario));
        data.insert("sexo".into(), Value::String(self.sexo.clone()));
        data.insert("cpf_supervisor".into(), text_or_null(self.cpf_supervisor.as_deref()));
        data.insert(
            "numero_departamento".into(),
            self.numero_departamento.map_or(Value::Null, Value::from),
        );
        data.insert("created_at".into(), self.created_at.as_ref().map_or(Value::Null, Timestamp::to_value));
        data.insert("updated_at".into(), self.updated_at.as_ref().map_or(Value::Null, Timestamp::to_value));
        data
    }

    fn from_representation(data: &KeyValue) -> Self {
        Self {
            cpf: first_truthy(data, &["cpf", "id"]).and_then(as_text).unwrap_or_default(),
            pnome: first_truthy(data, &["pnome", "primeiro_nome"])
                .and_then(as_text)
                .unwrap_or_default(),
            unome: first_truthy(data, &["unome", "ultimo_nome"])
                .and_then(as_text)
                .unwrap_or_default(),
            data_nasc: data.get("data_nasc").and_then(CalendarDate::from_value),
            endereco: present(data, "endereco")
                .and_then(as_text)
                .unwrap_or_else(|| DEFAULT_ENDERECO.to_string()),
            salario: present(data, "salario").and_then(as_float).unwrap_or(DEFAULT_SALARIO),
            sexo: present(data, "sexo")
                .and_then(as_text)
                .unwrap_or_else(|| DEFAULT_SEXO.to_string()),
            cpf_supervisor: present(data, "cpf_supervisor").and_then(as_text),
            numero_departamento: present(data, "numero_departamento").and_then(as_integer),
            created_at: data.get("created_at").and_then(Timestamp::from_value),
            updated_at: data.get("updated_at").and_then(Timestamp::from_value),
        }
    }
}

impl fmt::Display for Funcionario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Funcionario(cpf={}, nome={})", self.cpf, self.nome_completo())
    }
}
