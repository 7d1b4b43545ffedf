//! Static option tables for the select inputs

/// Regions offered on the gremio form.
pub const REGIONES: &[&str] = &[
    "Arica y Parinacota",
    "Tarapacá",
    "Antofagasta",
    "Atacama",
    "Coquimbo",
    "Valparaíso",
    "Metropolitana de Santiago",
    "O'Higgins",
    "Maule",
    "Ñuble",
    "Biobío",
    "La Araucanía",
    "Los Ríos",
    "Los Lagos",
    "Aysén del General Carlos Ibáñez del Campo",
    "Magallanes y la Antártica Chilena",
];

/// Business categories for gremios.
pub const RUBROS: &[&str] = &[
    "Acuicultura / Salmonicultura",
    "Aduanas / Portuario",
    "Agricultura",
    "Banquetería/Eventos",
    "Comercio",
    "Construcción",
    "Corporación",
    "Deporte",
    "Energía",
    "Financiero",
    "Forestal / Silvicultura",
    "Fundación",
    "Ganadería",
    "Gastronomía",
    "Hotelería / Turismo",
    "Industria",
    "Lechería",
    "Minería",
    "Reciclaje",
    "Seguridad",
    "Servicios",
    "Tecnología/Informática",
    "Transporte",
];

pub const CARGOS: &[&str] = &["Presidente", "Vicepresidente", "Miembro"];

pub const GENEROS: &[&str] = &["Masculino", "Femenino"];

/// Short region names used by the registrados list filter.
pub const REGIONES_CHILE: &[&str] = &[
    "Arica y Parinacota",
    "Tarapacá",
    "Antofagasta",
    "Atacama",
    "Coquimbo",
    "Valparaíso",
    "Metropolitana",
    "O’Higgins",
    "Maule",
    "Ñuble",
    "Biobío",
    "La Araucanía",
    "Los Ríos",
    "Los Lagos",
    "Aysén",
    "Magallanes",
];

pub const TIPOS_EMPRESA: &[&str] = &["Pyme", "Emprendedor"];

pub const NUM_TRABAJADORES: &[&str] = &["1 a 9", "10 a 50", "51-200", "Mas de 200"];

/// Business categories for registrados.
pub const RUBROS_REGISTRO: &[&str] = &[
    "Acuicultura / Pesca / Salmonicultura",
    "Aduanas / Portuario",
    "Agricultura",
    "Banquetería / Eventos / Gastronomía",
    "Canalistas / Regantes",
    "Comercio",
    "Construcción",
    "Corporación",
    "Co-Work",
    "Deporte",
    "Energía",
    "Financiero",
    "Forestal / Silvicultura",
    "Fundación",
    "Ganadería / Lechería",
    "Hotelería / Turismo",
    "Industrial",
    "Minería",
    "Multisectorial",
    "Panaderos",
    "Peluquería",
    "Reciclaje",
    "Remolachero",
    "Seguridad",
];

/// Advisory topics a registrado can ask for.
pub const ASESORIAS: &[&str] = &[
    "Asociatividad Ramal",
    "Conformación legal",
    "Contabilidadgratuita.cl",
    "Departamento de Estudios",
    "Formación",
    "Gestión de medios",
    "Imagen de marca",
    "Políticas Públicas",
    "Redes sociales",
    "Sitio web 2.0",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cargo;

    #[test]
    fn test_cargos_match_role_labels() {
        let labels: Vec<&str> = Cargo::variants().iter().map(Cargo::label).collect();
        assert_eq!(labels, CARGOS);
    }
}
