//! Department record.

use crate::domain::value_objects::Timestamp;
use crate::representation::{as_integer, as_text, first_truthy, present, text_or_null};
use crate::{KeyValue, TableRecord};
use serde_json::Value;
use std::fmt;

/// Department of the company.
///
/// `numero` stays `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Departamento {
    /// Department number (identifier).
    pub numero: Option<i64>,

    /// Department name.
    pub nome: String,

    /// Where the department is located.
    pub localizacao: Option<String>,

    /// CPF of the managing employee.
    pub gerente_cpf: Option<String>,

    /// Creation timestamp.
    pub created_at: Option<Timestamp>,

    /// Last update timestamp.
    pub updated_at: Option<Timestamp>,
}

impl Departamento {
    /// Creates an unnumbered department.
    #[must_use]
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            numero: None,
            nome: nome.into(),
            localizacao: None,
            gerente_cpf: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the department number.
    #[must_use]
    pub const fn with_numero(mut self, numero: i64) -> Self {
        self.numero = Some(numero);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_localizacao(mut self, localizacao: impl Into<String>) -> Self {
        self.localizacao = Some(localizacao.into());
        self
    }

    /// Sets the manager's CPF.
    #[must_use]
    pub fn with_gerente(mut self, gerente_cpf: impl Into<String>) -> Self {
        self.gerente_cpf = Some(gerente_cpf.into());
        self
    }
}

impl TableRecord for Departamento {
    fn to_representation(&self) -> KeyValue {
        let mut data = KeyValue::new();
        data.insert("numero".into(), self.numero.map_or(Value::Null, Value::from));
        data.insert("nome".into(), Value::String(self.nome.clone()));
        data.insert("localizacao".into(), text_or_null(self.localizacao.as_deref()));
        data.insert("gerente_cpf".into(), text_or_null(self.gerente_cpf.as_deref()));
        data.insert("created_at".into(), self.created_at.as_ref().map_or(Value::Null, Timestamp::to_value));
        data.insert("updated_at".into(), self.updated_at.as_ref().map_or(Value::Null, Timestamp::to_value));
        data
    }

    fn from_representation(data: &KeyValue) -> Self {
        Self {
            numero: first_truthy(data, &["numero", "id"]).and_then(as_integer),
            nome: first_truthy(data, &["nome", "descricao"])
                .and_then(as_text)
                .unwrap_or_default(),
            localizacao: present(data, "localizacao").and_then(as_text),
            gerente_cpf: first_truthy(data, &["gerente_cpf", "cpf_gerente"]).and_then(as_text),
            created_at: data.get("created_at").and_then(Timestamp::from_value),
            updated_at: data.get("updated_at").and_then(Timestamp::from_value),
        }
    }
}

impl fmt::Display for Departamento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.numero {
            Some(numero) => write!(f, "Departamento(numero={}, nome={})", numero, self.nome),
            None => write!(f, "Departamento(numero=None, nome={})", self.nome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IsoField;
    use serde_json::json;

    fn kv(value: Value) -> KeyValue {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_representation_round_trip() {
        let mut dept = Departamento::new("Engenharia")
            .with_numero(3)
            .with_localizacao("Bloco A")
            .with_gerente("12345678900");
        dept.created_at = Some(Timestamp::parse("2024-03-01T12:00:00+00:00"));

        let back = Departamento::from_representation(&dept.to_representation());
        assert_eq!(back, dept);
    }

    #[test]
    fn test_to_representation_emits_nulls() {
        let data = Departamento::new("RH").to_representation();
        assert_eq!(data.get("numero"), Some(&Value::Null));
        assert_eq!(data.get("localizacao"), Some(&Value::Null));
        assert_eq!(data.get("nome"), Some(&json!("RH")));
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_alias_keys() {
        let dept = Departamento::from_representation(&kv(json!({
            "id": 9,
            "descricao": "Financeiro",
            "cpf_gerente": "111"
        })));
        assert_eq!(dept.numero, Some(9));
        assert_eq!(dept.nome, "Financeiro");
        assert_eq!(dept.gerente_cpf.as_deref(), Some("111"));
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dept = Departamento::from_representation(&KeyValue::new());
        assert_eq!(dept, Departamento::new(""));
    }

    #[test]
    fn test_bad_timestamp_kept_raw() {
        let dept = Departamento::from_representation(&kv(json!({
            "numero": 1,
            "nome": "TI",
            "updated_at": "not a date"
        })));
        assert_eq!(dept.updated_at, Some(IsoField::Raw("not a date".to_string())));
        assert_eq!(dept.to_representation().get("updated_at"), Some(&json!("not a date")));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Departamento::new("Engenharia").with_numero(1).to_string(),
            "Departamento(numero=1, nome=Engenharia)"
        );
        assert_eq!(Departamento::new("RH").to_string(), "Departamento(numero=None, nome=RH)");
    }
}
