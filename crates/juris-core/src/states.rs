//! The 27 Brazilian federative units, in form order.

/// `sigla → nome`, iterated in the order the state picker shows them.
pub static STATES: phf::OrderedMap<&'static str, &'static str> = phf::phf_ordered_map! {
    "AC" => "Acre",
    "AL" => "Alagoas",
    "AP" => "Amapá",
    "AM" => "Amazonas",
    "BA" => "Bahia",
    "CE" => "Ceará",
    "DF" => "Distrito Federal",
    "ES" => "Espírito Santo",
    "GO" => "Goiás",
    "MA" => "Maranhão",
    "MS" => "Mato Grosso do Sul",
    "MT" => "Mato Grosso",
    "MG" => "Minas Gerais",
    "PA" => "Pará",
    "PB" => "Paraíba",
    "PR" => "Paraná",
    "PE" => "Pernambuco",
    "PI" => "Piauí",
    "RJ" => "Rio de Janeiro",
    "RN" => "Rio Grande do Norte",
    "RS" => "Rio Grande do Sul",
    "RO" => "Rondônia",
    "RR" => "Roraima",
    "SC" => "Santa Catarina",
    "SP" => "São Paulo",
    "SE" => "Sergipe",
    "TO" => "Tocantins",
};

/// State name for a sigla. Case-insensitive; surrounding whitespace ignored.
pub fn state_name(sigla: &str) -> Option<&'static str> {
    STATES.get(sigla.trim().to_uppercase().as_str()).copied()
}

/// Canonical (upper-case, `'static`) sigla for user input.
pub fn canonical_sigla(sigla: &str) -> Option<&'static str> {
    STATES
        .get_entry(sigla.trim().to_uppercase().as_str())
        .map(|(&k, _)| k)
}

/// `(sigla, nome)` pairs in form order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    STATES.entries().map(|(&k, &v)| (k, v))
}
