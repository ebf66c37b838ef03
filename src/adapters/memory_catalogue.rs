use crate::domain::model::{MovieRecord, StudioWins, WinRecord, YearWinners};
use crate::domain::ports::AwardRepository;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Name table handing out one id per distinct name, in order of first appearance.
#[derive(Debug, Default)]
struct NameTable {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl NameTable {
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// 正規化後的得獎目錄：電影、片商、製作人以及它們的關聯
#[derive(Debug, Default)]
pub struct AwardCatalogue {
    movies: Vec<MovieRecord>,
    studios: NameTable,
    producers: NameTable,
    // (movie index, studio id)
    movie_studios: Vec<(usize, usize)>,
    // (movie index, producer id)
    movie_producers: Vec<(usize, usize)>,
}

impl AwardCatalogue {
    pub fn from_movies(movies: Vec<MovieRecord>) -> Self {
        let mut catalogue = Self::default();
        for movie in movies {
            catalogue.insert(movie);
        }

        tracing::debug!(
            "Catalogue loaded: {} movies, {} studios, {} producers",
            catalogue.movies.len(),
            catalogue.studios.len(),
            catalogue.producers.len()
        );
        catalogue
    }

    pub fn insert(&mut self, movie: MovieRecord) {
        let index = self.movies.len();

        // 同一部電影重複列出的名字只關聯一次
        let mut seen = HashSet::new();
        for studio in &movie.studios {
            let id = self.studios.intern(studio);
            if seen.insert(id) {
                self.movie_studios.push((index, id));
            }
        }

        seen.clear();
        for producer in &movie.producers {
            let id = self.producers.intern(producer);
            if seen.insert(id) {
                self.movie_producers.push((index, id));
            }
        }

        self.movies.push(movie);
    }

    pub fn studio_count(&self) -> usize {
        self.studios.len()
    }

    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }

    fn is_winner(&self, movie: usize) -> bool {
        self.movies[movie].winner
    }
}

impl AwardRepository for AwardCatalogue {
    fn movie_count(&self) -> usize {
        self.movies.len()
    }

    fn winning_movie_count(&self) -> usize {
        self.movies.iter().filter(|movie| movie.winner).count()
    }

    fn winning_producers(&self) -> Vec<WinRecord> {
        let mut links: Vec<(usize, i32)> = self
            .movie_producers
            .iter()
            .filter(|(movie, _)| self.is_winner(*movie))
            .map(|&(movie, producer)| (producer, self.movies[movie].year))
            .collect();
        links.sort_unstable();

        links
            .into_iter()
            .map(|(producer, year)| WinRecord::new(self.producers.name(producer), year))
            .collect()
    }

    fn studios_by_wins(&self) -> Vec<StudioWins> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for &(movie, studio) in &self.movie_studios {
            if self.is_winner(movie) {
                *counts.entry(studio).or_default() += 1;
            }
        }

        let mut studios: Vec<StudioWins> = counts
            .into_iter()
            .map(|(studio, win_count)| StudioWins {
                name: self.studios.name(studio).to_string(),
                win_count,
            })
            .collect();
        studios.sort_by(|a, b| b.win_count.cmp(&a.win_count).then_with(|| a.name.cmp(&b.name)));
        studios
    }

    fn years_with_multiple_winners(&self) -> Vec<YearWinners> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for movie in self.movies.iter().filter(|movie| movie.winner) {
            *counts.entry(movie.year).or_default() += 1;
        }

        counts
            .into_iter()
            .filter(|&(_, winner_count)| winner_count > 1)
            .map(|(year, winner_count)| YearWinners { year, winner_count })
            .collect()
    }

    fn movies_by_year(&self, year: i32) -> Vec<MovieRecord> {
        self.movies
            .iter()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(year: i32, title: &str, studios: &[&str], producers: &[&str], winner: bool) -> MovieRecord {
        MovieRecord {
            year,
            title: title.to_string(),
            studios: studios.iter().map(|s| s.to_string()).collect(),
            producers: producers.iter().map(|p| p.to_string()).collect(),
            winner,
        }
    }

    fn sample_catalogue() -> AwardCatalogue {
        AwardCatalogue::from_movies(vec![
            movie(1986, "Howard the Duck", &["Universal Studios"], &["Gloria Katz"], true),
            movie(1986, "Under the Cherry Moon", &["Warner Bros."], &["Bob Cavallo", "Joe Ruffalo", "Steve Fargnoli"], true),
            movie(1986, "Blue City", &["Paramount Pictures"], &["William L. Hayward", "Walter Hill"], false),
            movie(1990, "The Adventures of Ford Fairlane", &["20th Century Fox"], &["Steven Perry", "Joel Silver"], true),
            movie(1991, "Hudson Hawk", &["TriStar Pictures"], &["Joel Silver"], true),
            movie(2015, "Fantastic Four", &["20th Century Fox"], &["Simon Kinberg", "Matthew Vaughn"], true),
        ])
    }

    #[test]
    fn test_names_are_normalized() {
        let catalogue = sample_catalogue();
        assert_eq!(catalogue.movie_count(), 6);
        assert_eq!(catalogue.winning_movie_count(), 5);
        assert_eq!(catalogue.studio_count(), 5);
        assert_eq!(catalogue.producer_count(), 10);
    }

    #[test]
    fn test_winning_producers_ordered_by_producer_then_year() {
        let catalogue = sample_catalogue();
        let wins = catalogue.winning_producers();

        assert_eq!(wins.len(), 8);
        assert!(!wins.iter().any(|w| w.producer_name == "Walter Hill"));

        let silver: Vec<i32> = wins
            .iter()
            .filter(|w| w.producer_name == "Joel Silver")
            .map(|w| w.year)
            .collect();
        assert_eq!(silver, vec![1990, 1991]);
        assert_eq!(wins[0], WinRecord::new("Gloria Katz", 1986));
    }

    #[test]
    fn test_studios_by_wins() {
        let studios = sample_catalogue().studios_by_wins();

        assert_eq!(
            studios[0],
            StudioWins {
                name: "20th Century Fox".to_string(),
                win_count: 2
            }
        );
        assert_eq!(studios.len(), 4);
        assert!(!studios.iter().any(|s| s.name == "Paramount Pictures"));
        assert_eq!(studios[1].name, "TriStar Pictures");
    }

    #[test]
    fn test_years_with_multiple_winners() {
        let years = sample_catalogue().years_with_multiple_winners();
        assert_eq!(
            years,
            vec![YearWinners {
                year: 1986,
                winner_count: 2
            }]
        );
    }

    #[test]
    fn test_movies_by_year() {
        let catalogue = sample_catalogue();
        let titles: Vec<String> = catalogue
            .movies_by_year(1986)
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Howard the Duck", "Under the Cherry Moon", "Blue City"]);
        assert!(catalogue.movies_by_year(1979).is_empty());
    }

    #[test]
    fn test_duplicate_producer_in_one_movie_links_once() {
        let catalogue = AwardCatalogue::from_movies(vec![movie(
            2000,
            "Battlefield Earth",
            &["Warner Bros."],
            &["Elie Samaha", "Elie Samaha"],
            true,
        )]);
        assert_eq!(catalogue.winning_producers().len(), 1);
    }
}
