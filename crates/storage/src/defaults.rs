use quiz_core::model::{Category, Question};

use crate::repository::{QuestionRecord, StorageError, questions_from_records};

/// Entries of the built-in bank: prompt, options, correct answer, category.
const DEFAULT_BANK: &[(&str, [&str; 4], &str, Category)] = &[
    (
        "¿Qué lenguaje se ejecuta principalmente en navegadores web?",
        ["Java", "Python", "JavaScript", "C++"],
        "JavaScript",
        Category::Programming,
    ),
    (
        "¿Qué significa 'IDE' en programación?",
        [
            "Internet Development Environment",
            "Integrated Development Environment",
            "Internal Debugging Engine",
            "Intelligent Design Editor",
        ],
        "Integrated Development Environment",
        Category::Programming,
    ),
    (
        "¿Cuál de estos es un lenguaje orientado a objetos?",
        ["HTML", "Python", "SQL", "CSS"],
        "Python",
        Category::Programming,
    ),
    (
        "¿Qué estructura permite repetir instrucciones en programación?",
        ["Condicional", "Bucle", "Variable", "Función"],
        "Bucle",
        Category::Programming,
    ),
    (
        "¿Qué símbolo se usa para comentar una línea en Python?",
        ["//", "/*", "#", "--"],
        "#",
        Category::Programming,
    ),

    (
        "¿Cuál es la fórmula del agua?",
        ["CO2", "H2O", "O2", "CH4"],
        "H2O",
        Category::Science,
    ),
    (
        "¿Qué planeta es conocido como el planeta rojo?",
        ["Marte", "Venus", "Júpiter", "Saturno"],
        "Marte",
        Category::Science,
    ),
    (
        "¿Qué órgano humano bombea la sangre?",
        ["Pulmón", "Riñón", "Corazón", "Hígado"],
        "Corazón",
        Category::Science,
    ),
    (
        "¿Qué científico propuso la teoría de la relatividad?",
        ["Newton", "Tesla", "Einstein", "Galileo"],
        "Einstein",
        Category::Science,
    ),
    (
        "¿Cuál es la unidad básica de la vida?",
        ["Átomo", "Célula", "Molécula", "Tejido"],
        "Célula",
        Category::Science,
    ),

    (
        "¿En qué año llegó Cristóbal Colón a América?",
        ["1492", "1500", "1512", "1485"],
        "1492",
        Category::History,
    ),
    (
        "¿Qué imperio construyó el Coliseo?",
        ["Egipcio", "Romano", "Griego", "Inca"],
        "Romano",
        Category::History,
    ),
    (
        "¿Quién fue el primer presidente de los Estados Unidos?",
        ["Abraham Lincoln", "Thomas Jefferson", "George Washington", "John Adams"],
        "George Washington",
        Category::History,
    ),
    (
        "¿Dónde se firmó la Declaración de Independencia de EE. UU.?",
        ["Boston", "Filadelfia", "Nueva York", "Washington D.C."],
        "Filadelfia",
        Category::History,
    ),
    (
        "¿En qué siglo fue la Revolución Francesa?",
        ["XV", "XVI", "XVII", "XVIII"],
        "XVIII",
        Category::History,
    ),

    (
        "¿Quién escribió 'Cien años de soledad'?",
        ["Mario Vargas Llosa", "Julio Cortázar", "Gabriel García Márquez", "Pablo Neruda"],
        "Gabriel García Márquez",
        Category::Literature,
    ),
    (
        "¿Cuál es la obra más famosa de Miguel de Cervantes?",
        ["La Odisea", "El Quijote", "Fausto", "La Ilíada"],
        "El Quijote",
        Category::Literature,
    ),
    (
        "¿Qué poeta escribió '20 poemas de amor y una canción desesperada'?",
        ["Neruda", "Borges", "Benedetti", "Machado"],
        "Neruda",
        Category::Literature,
    ),
    (
        "¿Qué género literario es una narración breve con moraleja?",
        ["Fábula", "Poema", "Ensayo", "Novela"],
        "Fábula",
        Category::Literature,
    ),
    (
        "¿Cuál de estos escritores fue peruano?",
        ["Julio Cortázar", "Gabriel García Márquez", "Mario Vargas Llosa", "Pablo Neruda"],
        "Mario Vargas Llosa",
        Category::Literature,
    ),
];

/// The 20 questions used when no question file is available.
///
/// Entries are validated through the same path as file-loaded records.
///
/// # Errors
///
/// Returns `StorageError::InvalidQuestion` naming the first entry that fails
/// validation.
pub fn default_questions() -> Result<Vec<Question>, StorageError> {
    records_from_table(DEFAULT_BANK)
}

fn records_from_table(
    table: &[(&str, [&str; 4], &str, Category)],
) -> Result<Vec<Question>, StorageError> {
    let records = table
        .iter()
        .map(|(prompt, options, correct, category)| QuestionRecord {
            prompt: (*prompt).to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
            correct_answer: (*correct).to_string(),
            category: Some(*category),
        })
        .collect();
    questions_from_records(records)
}
