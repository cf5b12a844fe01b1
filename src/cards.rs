use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). The discriminant is the rank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `2..=14`.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Rank token used in card notation ("2".."10", "J", "Q", "K", "A").
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    /// Face letters map to 11..=14; anything else must be a base-10 integer in `2..=14`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardParseError::InvalidCardFormat(s.to_string());
        match s.to_ascii_uppercase().as_str() {
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            digits => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let v: u8 = digits.parse().map_err(|_| invalid())?;
                Rank::from_value(v).ok_or_else(invalid)
            }
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardParseError::UnknownSuit(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Two cards *pair* when their ranks match.
///
/// ```
/// use poker_odds::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Diamonds);
/// assert_eq!(card.to_string(), "10D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub fn pairs_with(self, other: Card) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card code: '{0}'")]
    InvalidCardFormat(String),
    #[error("unknown suit: '{0}'")]
    UnknownSuit(String),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

/// Parse one card code: leading characters are the rank token, the last one is the suit.
///
/// ```
/// use poker_odds::cards::{parse_card, Card, Rank, Suit};
///
/// assert_eq!(parse_card("AH").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(parse_card("10d").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
/// assert!(parse_card("AX").is_err());
/// ```
pub fn parse_card(code: &str) -> Result<Card, CardParseError> {
    let len = code.chars().count();
    if !(2..=3).contains(&len) {
        return Err(CardParseError::InvalidCardFormat(code.to_string()));
    }
    let Some((split, suit_ch)) = code.char_indices().last() else {
        return Err(CardParseError::InvalidCardFormat(code.to_string()));
    };
    let rank = code[..split]
        .parse::<Rank>()
        .map_err(|_| CardParseError::InvalidCardFormat(code.to_string()))?;
    let suit = Suit::try_from(suit_ch)?;
    Ok(Card::new(rank, suit))
}

/// Parse a list of card codes in order, stopping at the first failure.
pub fn parse_list<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, CardParseError> {
    codes.iter().map(|c| parse_card(c.as_ref())).collect()
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_odds::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10C").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(parse_card)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_tokens_parse() {
        assert_eq!("A".parse::<Rank>().unwrap(), Rank::Ace);
        assert_eq!("q".parse::<Rank>().unwrap(), Rank::Queen);
        assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
        assert_eq!("2".parse::<Rank>().unwrap(), Rank::Two);
        assert!("1".parse::<Rank>().is_err());
        assert!("T".parse::<Rank>().is_err());
        assert!("+5".parse::<Rank>().is_err());
    }

    #[test]
    fn suit_letters_are_case_insensitive() {
        assert_eq!(Suit::try_from('h').unwrap(), Suit::Hearts);
        assert_eq!(Suit::try_from('S').unwrap(), Suit::Spades);
        assert!(matches!(Suit::try_from('x'), Err(CardParseError::UnknownSuit(_))));
    }

    #[test]
    fn card_display_and_parse() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "AS");
        assert_eq!(parse_card("AS").unwrap(), a);
        assert_eq!(parse_card("ah").unwrap(), Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(parse_card("10D").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    }

    #[test]
    fn length_outside_two_to_three_is_invalid_format() {
        assert!(matches!(parse_card("A"), Err(CardParseError::InvalidCardFormat(_))));
        assert!(matches!(parse_card(""), Err(CardParseError::InvalidCardFormat(_))));
        assert!(matches!(parse_card("10HH"), Err(CardParseError::InvalidCardFormat(_))));
    }

    #[test]
    fn bad_rank_reported_before_bad_suit() {
        assert!(matches!(parse_card("XZ"), Err(CardParseError::InvalidCardFormat(_))));
        assert!(matches!(parse_card("KZ"), Err(CardParseError::UnknownSuit(s)) if s == "Z"));
    }

    #[test]
    fn pairs_ignores_suit() {
        let a = Card::new(Rank::Nine, Suit::Clubs);
        let b = Card::new(Rank::Nine, Suit::Hearts);
        assert!(a.pairs_with(b));
        assert_ne!(a, b);
    }

    #[test]
    fn parse_list_is_fail_fast_and_ordered() {
        let xs = parse_list(&["AH", "10D", "KS"]).unwrap();
        assert_eq!(xs, vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::King, Suit::Spades),
        ]);
        let err = parse_list(&["AH", "ZZZZ", "KX"]).unwrap_err();
        assert!(matches!(err, CardParseError::InvalidCardFormat(s) if s == "ZZZZ"));
    }
}
