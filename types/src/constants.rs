/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each side before the player acts.
pub const INITIAL_HAND_SIZE: usize = 2;

/// Best possible hand value.
pub const BLACKJACK: u16 = 21;

/// The dealer keeps drawing while below this value.
pub const DEALER_STANDS_ON: u16 = 17;

/// Amount an ace loses when counted as one instead of eleven.
pub const ACE_REDUCTION: u16 = 10;

/// Default name of the human participant.
pub const PLAYER_NAME: &str = "Player";

/// Fixed name of the house participant.
pub const DEALER_NAME: &str = "Dealer";

/// Lifetime of a stored session (one hour).
pub const SESSION_TTL_SECS: u64 = 60 * 60;

/// Path prefix of every game route.
pub const API_PREFIX: &str = "/api/v1";

/// Message returned when a session cannot be restored.
pub const SESSION_NOT_FOUND_MESSAGE: &str = "Please start a new game first.";
