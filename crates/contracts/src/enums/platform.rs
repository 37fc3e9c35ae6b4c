use serde::{Deserialize, Serialize};

/// Платформы, из которых приходят выгрузки продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Shopee,
    MercadoLivre,
    Shein,
    Other,
}

impl Platform {
    /// Получить код платформы
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Shopee => "shopee",
            Platform::MercadoLivre => "mercado-livre",
            Platform::Shein => "shein",
            Platform::Other => "other",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Shopee => "Shopee",
            Platform::MercadoLivre => "Mercado Livre",
            Platform::Shein => "Shein",
            Platform::Other => "Outra",
        }
    }

    pub fn all() -> Vec<Platform> {
        vec![
            Platform::Shopee,
            Platform::MercadoLivre,
            Platform::Shein,
            Platform::Other,
        ]
    }

    /// Парсинг из кода или отображаемого имени
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code) || p.display_name().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_code_and_name() {
        assert_eq!(Platform::from_code("shopee"), Some(Platform::Shopee));
        assert_eq!(Platform::from_code("Mercado Livre"), Some(Platform::MercadoLivre));
        assert_eq!(Platform::from_code(" SHEIN "), Some(Platform::Shein));
        assert_eq!(Platform::from_code("amazon"), None);
    }
}
