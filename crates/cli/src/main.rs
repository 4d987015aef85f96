use api_shared::{BookRes, HealthService};
use bookcat_core::{Book, BookService, CoreConfig, NewBook};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookcat")]
#[command(about = "Book catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the catalog is reachable
    Health,
    /// List all books
    List {
        /// Print JSON instead of one line per book
        #[arg(long)]
        json: bool,
    },
    /// Show one book
    Show {
        /// Store id of the book
        id: String,
    },
    /// Add a book
    Add {
        /// Title (1-100 characters)
        title: String,
        /// Author (1-50 characters)
        author: String,
        /// Publication date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// 13-digit ISBN
        #[arg(long)]
        isbn: String,
        /// Fiction, Non-Fiction, Mystery, Fantasy, Romance, Sci-Fi or Others
        #[arg(long)]
        genre: String,
        /// Rating from 1 to 5
        #[arg(long)]
        rating: i64,
    },
    /// Delete a book
    Delete {
        /// Store id of the book
        id: String,
    },
    /// Attach a cover photo to a book
    AttachPhoto {
        /// Store id of the book
        id: String,
        /// Image file to upload
        path: PathBuf,
    },
}

fn summary(book: &Book) -> String {
    format!(
        "ID: {}, {}: {} by {} ({}, {}, rated {})",
        book.id_str(),
        book.unique_id,
        book.title,
        book.author,
        book.genre,
        book.publication_date,
        book.rating
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cfg = CoreConfig::from_lookup(|name| std::env::var(name).ok())?;
    let service = BookService::from_config(&cfg);

    match cli.command {
        Some(Commands::Health) => {
            println!("{}", HealthService::check_health().message);
        }
        Some(Commands::List { json }) => {
            let books = service.list()?;
            if json {
                let res: Vec<BookRes> = books.into_iter().map(BookRes::from).collect();
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else if books.is_empty() {
                println!("There are no books.");
            } else {
                for book in &books {
                    println!("{}", summary(book));
                }
            }
        }
        Some(Commands::Show { id }) => match service.get_by_id(&id) {
            Ok(book) => println!("{}", serde_json::to_string_pretty(&BookRes::from(book))?),
            Err(e) => eprintln!("Error showing book: {}", e),
        },
        Some(Commands::Add {
            title,
            author,
            date,
            isbn,
            genre,
            rating,
        }) => {
            let new_book = NewBook {
                title: Some(title),
                author: Some(author),
                publication_date: Some(date),
                isbn: Some(isbn),
                genre: Some(genre),
                rating,
            };
            match service.create(new_book) {
                Ok(book) => println!("Created {}", summary(&book)),
                Err(e) => eprintln!("Error creating book: {}", e),
            }
        }
        Some(Commands::Delete { id }) => match service.delete_by_id(&id) {
            Ok(()) => println!("Deleted book {}", id),
            Err(e) => eprintln!("Error deleting book: {}", e),
        },
        Some(Commands::AttachPhoto { id, path }) => {
            let bytes = std::fs::read(&path)?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            match service.upload_photo(&id, &bytes, file_name) {
                Ok(url) => println!("Photo available at {}", url),
                Err(e) => eprintln!("Error attaching photo: {}", e),
            }
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_parses_typed_arguments() {
        let cli = Cli::try_parse_from([
            "bookcat",
            "add",
            "Dune",
            "Herbert",
            "--date",
            "1965-01-01",
            "--isbn",
            "1234567890123",
            "--genre",
            "Sci-Fi",
            "--rating",
            "5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add { date, rating, .. }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(1965, 1, 1).unwrap());
                assert_eq!(rating, 5);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_add_rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "bookcat", "add", "Dune", "Herbert", "--date", "May 1965", "--isbn", "1", "--genre",
            "Fiction", "--rating", "3",
        ]);
        assert!(result.is_err());
    }
}
