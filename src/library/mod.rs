//! In-memory shelves and books. Nothing here persists; the catalog is
//! seeded with sample data and mutated only for the lifetime of the run.

pub mod samples;

/// A book entry as shown on the shelf screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_color: String,
    /// Percent read, 0..=100.
    pub progress: u8,
    pub reading: bool,
    pub shelf_id: String,
}

/// A named shelf grouping books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub shelves: Vec<Shelf>,
    pub books: Vec<Book>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The sample catalog the app boots with.
    pub fn seeded() -> Self {
        let shelves = vec![
            Shelf {
                id: "s1".into(),
                name: "Classics".into(),
                description: "Timeless works".into(),
            },
            Shelf {
                id: "s2".into(),
                name: "Modern".into(),
                description: "Recent reads".into(),
            },
        ];

        let books = vec![
            Book {
                id: "b1".into(),
                title: "The Garden at Dusk".into(),
                author: "Jun Arai".into(),
                cover_color: "#3A6073".into(),
                progress: 18,
                reading: true,
                shelf_id: "s1".into(),
            },
            Book {
                id: "b2".into(),
                title: "Shadows and Light".into(),
                author: "Mika Sato".into(),
                cover_color: "#8E2DE2".into(),
                progress: 0,
                reading: false,
                shelf_id: "s1".into(),
            },
            Book {
                id: "b3".into(),
                title: "The Brush and Ink".into(),
                author: "K. Tanaka".into(),
                cover_color: "#1F4037".into(),
                progress: 72,
                reading: false,
                shelf_id: "s2".into(),
            },
        ];

        Self { shelves, books }
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn books_on_shelf(&self, shelf_id: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.shelf_id == shelf_id).collect()
    }

    pub fn add_shelf(&mut self, name: &str, description: &str) -> &Shelf {
        let id = format!("s{}", self.shelves.len() + 1);
        self.shelves.push(Shelf {
            id,
            name: name.to_string(),
            description: description.to_string(),
        });
        self.shelves.last().expect("just pushed")
    }

    /// Registers an imported document as a book on the given shelf.
    pub fn add_book(&mut self, title: &str, author: &str, shelf_id: &str) -> &Book {
        let id = format!("b{}", self.books.len() + 1);
        self.books.push(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            cover_color: "#2C3E50".into(),
            progress: 0,
            reading: false,
            shelf_id: shelf_id.to_string(),
        });
        self.books.last().expect("just pushed")
    }

    /// Records how far a reading session got. Only one book at a time is
    /// flagged as the active read.
    pub fn set_progress(&mut self, id: &str, percent: u8) {
        for book in &mut self.books {
            if book.id == id {
                book.progress = percent.min(100);
                book.reading = percent > 0 && percent < 100;
            }
        }
    }
}
