//! Swipe session integration tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use card_picker::gesture::decode_pair;
use card_picker::{
    Card, ChangeKind, PartialCard, Rank, SessionEvent, SessionOptions, SessionState, Suit, Swipe,
    SwipeSession, TimerError, TimerKind,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use Swipe::{Down, Left, Right, Up};

fn session_with(swipes: &[Swipe]) -> SwipeSession {
    let mut session = SwipeSession::default();
    for &swipe in swipes {
        session.append_swipe(swipe);
    }
    session
}

fn record_events(session: &mut SwipeSession) -> Rc<RefCell<Vec<SessionEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.subscribe(move |event: &SessionEvent| sink.borrow_mut().push(*event));
    events
}

#[test]
fn first_swipe_only_buffers() {
    let mut session = SwipeSession::default();
    assert_eq!(session.state(), SessionState::Empty);

    assert_eq!(session.append_swipe(Up), None);
    assert_eq!(session.state(), SessionState::RankPending);
    assert_eq!(session.card(), None);
    assert_eq!(session.swipes(), &[Up]);
}

#[test]
fn two_swipes_give_the_rank() {
    let mut session = SwipeSession::default();
    session.append_swipe(Up);
    let event = session.append_swipe(Right).unwrap();

    assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));
    assert_eq!(event.change, ChangeKind::Resolved);
    assert_eq!(event.card, Some(Card::Partial(PartialCard::Rank(Rank::Ace))));
}

#[test]
fn dead_pairs_resolve_to_joker() {
    for pair in [[Left, Right], [Down, Up], [Right, Left]] {
        let session = session_with(&pair);
        assert_eq!(session.state(), SessionState::Joker);
        assert_eq!(session.card(), Some(Card::Joker));
    }
}

#[test]
fn every_pair_maps_to_rank_or_joker() {
    for first in Swipe::ALL {
        for second in Swipe::ALL {
            let session = session_with(&[first, second]);
            let expected = Rank::from_value(decode_pair(first, second))
                .map_or(SessionState::Joker, SessionState::RankKnown);
            assert_eq!(session.state(), expected);
        }
    }
}

#[test]
fn third_swipe_gives_the_suit() {
    let session = session_with(&[Up, Right, Right]);
    assert_eq!(session.state(), SessionState::Complete(Rank::Ace, Suit::Hearts));
    assert_eq!(session.card(), Some(Card::new(Rank::Ace, Suit::Hearts)));

    let suits = [
        (Up, Suit::Spades),
        (Right, Suit::Hearts),
        (Down, Suit::Clubs),
        (Left, Suit::Diamonds),
    ];
    for (swipe, suit) in suits {
        let session = session_with(&[Up, Up, swipe]);
        assert_eq!(session.card(), Some(Card::new(Rank::Queen, suit)));
    }
}

#[test]
fn resolved_cards_ignore_swipes() {
    let mut session = session_with(&[Down, Down, Left]);
    assert_eq!(session.state(), SessionState::Complete(Rank::Six, Suit::Diamonds));

    assert_eq!(session.append_swipe(Up), None);
    assert_eq!(session.swipes().len(), 3);
    assert_eq!(session.state(), SessionState::Complete(Rank::Six, Suit::Diamonds));

    let mut joker = session_with(&[Left, Right]);
    assert_eq!(joker.append_swipe(Up), None);
    assert_eq!(joker.swipes().len(), 2);
    assert_eq!(joker.state(), SessionState::Joker);
}

#[test]
fn reset_is_idempotent() {
    let mut session = session_with(&[Up, Right]);

    let event = session.reset().unwrap();
    assert_eq!(event.change, ChangeKind::Reset);
    assert_eq!(event.card, None);
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.swipes().is_empty());

    assert_eq!(session.reset(), None);
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.swipes().is_empty());
}

#[test]
fn reset_discards_a_lone_swipe() {
    let mut session = session_with(&[Left]);
    assert!(session.reset().is_some());
    assert_eq!(session.state(), SessionState::Empty);

    // A fresh entry starts from scratch.
    session.append_swipe(Up);
    session.append_swipe(Right);
    assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));
}

#[test]
fn commit_only_accepts_resolved_cards() {
    let mut session = SwipeSession::default();
    assert_eq!(session.commit(), None);

    session.append_swipe(Up);
    session.append_swipe(Right);
    assert_eq!(session.commit(), None);
    assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));

    session.append_swipe(Right);
    assert_eq!(session.commit(), Some(Card::new(Rank::Ace, Suit::Hearts)));
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.swipes().is_empty());

    let mut joker = session_with(&[Down, Up]);
    assert_eq!(joker.commit(), Some(Card::Joker));
}

#[test]
fn observers_see_every_change() {
    let mut session = SwipeSession::default();
    let events = record_events(&mut session);

    session.append_swipe(Up);
    session.append_swipe(Right);
    session.append_swipe(Right);
    session.commit();
    session.append_swipe(Left);
    session.reset();
    session.reset();

    let changes: Vec<(Option<Card>, ChangeKind)> = events
        .borrow()
        .iter()
        .map(|event| (event.card, event.change))
        .collect();
    assert_eq!(
        changes,
        vec![
            (
                Some(Card::Partial(PartialCard::Rank(Rank::Ace))),
                ChangeKind::Resolved
            ),
            (Some(Card::new(Rank::Ace, Suit::Hearts)), ChangeKind::Resolved),
            (None, ChangeKind::Cleared),
            (None, ChangeKind::Reset),
        ]
    );
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    let mut session = SwipeSession::default();
    let events = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&events);
    let id = session.subscribe(move |_: &SessionEvent| *sink.borrow_mut() += 1);

    session.append_swipe(Left);
    session.append_swipe(Right);
    assert_eq!(*events.borrow(), 1);

    assert!(session.unsubscribe(id));
    assert!(!session.unsubscribe(id));
    session.reset();
    assert_eq!(*events.borrow(), 1);
}

#[test]
fn long_press_discards_the_card() {
    let mut session = session_with(&[Up, Right]);
    let timer = session.begin_long_press();
    assert_eq!(timer.delay, Duration::from_millis(500));
    assert_eq!(timer.ticket.kind(), TimerKind::LongPressCancel);

    assert_eq!(session.fire_timer(timer.ticket), Ok(None));
    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(session.fire_timer(timer.ticket), Err(TimerError::Cancelled));
}

#[test]
fn superseded_long_press_never_fires() {
    let mut session = session_with(&[Up, Right]);
    let first = session.begin_long_press();
    let second = session.begin_long_press();

    assert_eq!(session.fire_timer(first.ticket), Err(TimerError::Stale));
    assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));

    session.end_long_press();
    assert_eq!(session.fire_timer(second.ticket), Err(TimerError::Cancelled));
    assert_eq!(session.state(), SessionState::RankKnown(Rank::Ace));
}

#[test]
fn delayed_commit_hands_over_the_card() {
    let options = SessionOptions::default().with_delay_before_commit(Some(Duration::from_secs(2)));
    let mut session = SwipeSession::new(options);
    let events = record_events(&mut session);

    session.append_swipe(Up);
    session.append_swipe(Up);
    assert_eq!(session.scheduled_timer(TimerKind::DelayedCommit), None);

    session.append_swipe(Down);
    let timer = session.scheduled_timer(TimerKind::DelayedCommit).unwrap();
    assert_eq!(timer.delay, Duration::from_secs(2));

    assert_eq!(
        session.fire_timer(timer.ticket),
        Ok(Some(Card::new(Rank::Queen, Suit::Clubs)))
    );
    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(
        events.borrow().last().map(|event| event.change),
        Some(ChangeKind::Cleared)
    );
}

#[test]
fn reset_cancels_pending_commit() {
    let options = SessionOptions::default().with_delay_before_commit(Some(Duration::from_secs(1)));
    let mut session = SwipeSession::new(options);

    session.append_swipe(Left);
    session.append_swipe(Right);
    let timer = session.scheduled_timer(TimerKind::DelayedCommit).unwrap();

    session.reset();
    assert_eq!(session.scheduled_timer(TimerKind::DelayedCommit), None);
    assert_eq!(session.fire_timer(timer.ticket), Err(TimerError::Cancelled));

    // The stale ticket must not commit the next card either.
    session.append_swipe(Down);
    session.append_swipe(Up);
    assert_eq!(session.fire_timer(timer.ticket), Err(TimerError::Stale));
    assert_eq!(session.state(), SessionState::Joker);
}

#[test]
fn explicit_commit_cancels_pending_commit() {
    let options = SessionOptions::default().with_delay_before_commit(Some(Duration::from_secs(1)));
    let mut session = SwipeSession::new(options);

    session.append_swipe(Right);
    session.append_swipe(Left);
    let timer = session.scheduled_timer(TimerKind::DelayedCommit).unwrap();

    assert_eq!(session.commit(), Some(Card::Joker));
    assert_eq!(session.fire_timer(timer.ticket), Err(TimerError::Cancelled));
}

#[test]
fn random_swipe_streams_never_exceed_three_swipes() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut session = SwipeSession::default();

    for _ in 0..1_000 {
        match rng.random_range(0..10) {
            0 => {
                session.reset();
            }
            1 => {
                if let Some(card) = session.commit() {
                    assert!(card.is_resolved());
                }
            }
            _ => {
                let swipe = Swipe::ALL[rng.random_range(0..Swipe::ALL.len())];
                session.append_swipe(swipe);
            }
        }

        assert!(session.swipes().len() <= 3);
        match session.state() {
            SessionState::Empty => assert!(session.swipes().is_empty()),
            SessionState::RankPending => assert_eq!(session.swipes().len(), 1),
            SessionState::RankKnown(_) => assert_eq!(session.swipes().len(), 2),
            SessionState::Joker => assert_eq!(session.swipes().len(), 2),
            SessionState::Complete(..) => assert_eq!(session.swipes().len(), 3),
        }
    }
}
