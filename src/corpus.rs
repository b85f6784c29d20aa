use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::RecommenderError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub user_input: String,
    pub response: String,
}

impl TrainingExample {
    pub fn new(user_input: &str, response: &str) -> Self {
        Self {
            user_input: user_input.to_string(),
            response: response.to_string(),
        }
    }
}

const BUILTIN_EXAMPLES: &[(&str, &str)] = &[
    (
        "Hola",
        "¡Hola! ¿Qué tipo de producto estás buscando hoy?",
    ),
    (
        "Busco un portátil para programar",
        "Te recomiendo un portátil con al menos 16 GB de RAM y un SSD de 512 GB.",
    ),
    (
        "Necesito un teléfono barato",
        "Un teléfono de gama media con buena batería es la opción más equilibrada.",
    ),
    (
        "Quiero unos auriculares inalámbricos",
        "Prueba unos auriculares con cancelación de ruido y al menos 20 horas de batería.",
    ),
    (
        "Recomiéndame un monitor para juegos",
        "Un monitor de 27 pulgadas a 144 Hz con panel IPS es una gran elección.",
    ),
    (
        "¿Qué cafetera me recomiendas?",
        "Una cafetera de cápsulas es cómoda; si prefieres sabor, elige una espresso manual.",
    ),
    (
        "Busco un regalo para un lector",
        "Un lector de libros electrónicos con luz integrada es un regalo muy acertado.",
    ),
    (
        "Gracias",
        "¡De nada! Si necesitas otra recomendación, aquí estaré.",
    ),
];

/// Immutable list of known `(input, response)` pairs.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    examples: Vec<TrainingExample>,
}

impl Corpus {
    pub fn new(examples: Vec<TrainingExample>) -> Self {
        Self { examples }
    }

    pub fn builtin() -> Self {
        let examples = BUILTIN_EXAMPLES
            .iter()
            .map(|(user_input, response)| TrainingExample::new(user_input, response))
            .collect();
        Self { examples }
    }

    /// Reads a JSON array of `{ "user_input", "response" }` objects.
    pub fn from_file(path: &Path) -> Result<Self, RecommenderError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RecommenderError::ConfigError(format!(
                "cannot read training data {}: {}",
                path.display(),
                e
            ))
        })?;
        let examples: Vec<TrainingExample> = serde_json::from_str(&raw).map_err(|e| {
            RecommenderError::ConfigError(format!(
                "invalid training data {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { examples })
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
