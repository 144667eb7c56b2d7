//! Book table for the default resolver (KJV versification)

/// OSIS id, English name, chapter count
#[derive(Debug)]
pub struct BookInfo {
    pub osis_id: &'static str,
    pub name: &'static str,
    pub chapters: u32,
}

macro_rules! book {
    ($id:expr, $name:expr, $chapters:expr) => {
        BookInfo {
            osis_id: $id,
            name: $name,
            chapters: $chapters,
        }
    };
}

pub static BOOKS: &[BookInfo] = &[
    book!("Gen", "Genesis", 50),
    book!("Exod", "Exodus", 40),
    book!("Lev", "Leviticus", 27),
    book!("Num", "Numbers", 36),
    book!("Deut", "Deuteronomy", 34),
    book!("Josh", "Joshua", 24),
    book!("Judg", "Judges", 21),
    book!("Ruth", "Ruth", 4),
    book!("1Sam", "1 Samuel", 31),
    book!("2Sam", "2 Samuel", 24),
    book!("1Kgs", "1 Kings", 22),
    book!("2Kgs", "2 Kings", 25),
    book!("1Chr", "1 Chronicles", 29),
    book!("2Chr", "2 Chronicles", 36),
    book!("Ezra", "Ezra", 10),
    book!("Neh", "Nehemiah", 13),
    book!("Esth", "Esther", 10),
    book!("Job", "Job", 42),
    book!("Ps", "Psalms", 150),
    book!("Prov", "Proverbs", 31),
    book!("Eccl", "Ecclesiastes", 12),
    book!("Song", "Song of Solomon", 8),
    book!("Isa", "Isaiah", 66),
    book!("Jer", "Jeremiah", 52),
    book!("Lam", "Lamentations", 5),
    book!("Ezek", "Ezekiel", 48),
    book!("Dan", "Daniel", 12),
    book!("Hos", "Hosea", 14),
    book!("Joel", "Joel", 3),
    book!("Amos", "Amos", 9),
    book!("Obad", "Obadiah", 1),
    book!("Jonah", "Jonah", 4),
    book!("Mic", "Micah", 7),
    book!("Nah", "Nahum", 3),
    book!("Hab", "Habakkuk", 3),
    book!("Zeph", "Zephaniah", 3),
    book!("Hag", "Haggai", 2),
    book!("Zech", "Zechariah", 14),
    book!("Mal", "Malachi", 4),
    book!("Matt", "Matthew", 28),
    book!("Mark", "Mark", 16),
    book!("Luke", "Luke", 24),
    book!("John", "John", 21),
    book!("Acts", "Acts", 28),
    book!("Rom", "Romans", 16),
    book!("1Cor", "1 Corinthians", 16),
    book!("2Cor", "2 Corinthians", 13),
    book!("Gal", "Galatians", 6),
    book!("Eph", "Ephesians", 6),
    book!("Phil", "Philippians", 4),
    book!("Col", "Colossians", 4),
    book!("1Thess", "1 Thessalonians", 5),
    book!("2Thess", "2 Thessalonians", 3),
    book!("1Tim", "1 Timothy", 6),
    book!("2Tim", "2 Timothy", 4),
    book!("Titus", "Titus", 3),
    book!("Phlm", "Philemon", 1),
    book!("Heb", "Hebrews", 13),
    book!("Jas", "James", 5),
    book!("1Pet", "1 Peter", 5),
    book!("2Pet", "2 Peter", 3),
    book!("1John", "1 John", 5),
    book!("2John", "2 John", 1),
    book!("3John", "3 John", 1),
    book!("Jude", "Jude", 1),
    book!("Rev", "Revelation", 22),
];

/// Look a book up by OSIS id or English name, ignoring case
pub fn find_book(name: &str) -> Option<&'static BookInfo> {
    BOOKS
        .iter()
        .find(|b| b.osis_id.eq_ignore_ascii_case(name) || b.name.eq_ignore_ascii_case(name))
}
