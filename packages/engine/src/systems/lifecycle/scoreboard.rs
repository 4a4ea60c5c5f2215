/// Insert and score counters. Both only ever grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    medal_value: u32,
    inserted: u32,
    score: u32,
}

impl Scoreboard {
    pub fn new(medal_value: u32) -> Self {
        Self { medal_value, inserted: 0, score: 0 }
    }

    /// Medals dropped by the spawn timer (the initial pile is not counted)
    pub fn inserted(&self) -> u32 {
        self.inserted
    }

    /// Points scored so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn medal_value(&self) -> u32 {
        self.medal_value
    }

    pub fn record_insert(&mut self) {
        self.inserted = self.inserted.saturating_add(1);
    }

    pub fn record_scored(&mut self) {
        self.score = self.score.saturating_add(self.medal_value);
    }

    pub fn insert_text(&self) -> String {
        format!("Insert: {}", self.inserted.saturating_mul(self.medal_value))
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let board = Scoreboard::new(10);
        assert_eq!(board.insert_text(), "Insert: 0");
        assert_eq!(board.score_text(), "Score: 0");
    }

    #[test]
    fn insert_text_is_scaled_by_medal_value() {
        let mut board = Scoreboard::new(10);
        board.record_insert();
        board.record_insert();
        assert_eq!(board.inserted(), 2);
        assert_eq!(board.insert_text(), "Insert: 20");
    }

    #[test]
    fn each_scored_medal_adds_its_value() {
        let mut board = Scoreboard::new(10);
        for _ in 0..3 {
            board.record_scored();
        }
        assert_eq!(board.score(), 30);
        assert_eq!(board.score_text(), "Score: 30");
    }
}
