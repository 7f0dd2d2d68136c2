mod support;

use magstripe::{
    avec::{CardReader, Presence, card::Error},
    sans::{
        capture::Capture,
        swipe::{DecodeError, Direction},
        track::{Track, TrackError},
    },
};

use support::{encode, reversed};

/// A card-present signal that plays back swipes, feeding each one to the
/// capture as a strobe interrupt would while the card is engaged.
struct Swipes<'a> {
    capture: &'a Capture,
    swipes: Vec<Vec<bool>>,
    polls: usize,
}

impl<'a> Swipes<'a> {
    fn new(capture: &'a Capture, swipes: impl IntoIterator<Item = Vec<bool>>) -> Self {
        Self {
            capture,
            swipes: swipes.into_iter().collect(),
            polls: 0,
        }
    }
}

impl Presence for Swipes<'_> {
    fn is_present(&mut self) -> bool {
        let (swipe, phase) = (self.polls / 3, self.polls % 3);
        self.polls += 1;

        match (self.swipes.get(swipe), phase) {
            (Some(_), 0) => true,
            (Some(bits), 1) => {
                bits.iter().for_each(|&b| self.capture.push(b));
                true
            }
            _ => false,
        }
    }
}

#[test]
fn read_forward() {
    let capture: Capture = Capture::new();
    let swipe = encode(Track::Two, ";1234?").to_vec();
    let mut reader = CardReader::new(2, &capture, Swipes::new(&capture, [swipe])).unwrap();
    let mut o = [0; 40];

    let chars = reader.read(&mut o).unwrap();
    assert_eq!(&o[..chars], b";1234?0");
    assert_eq!(reader.read_direction(), Direction::Forward);
}

#[test]
fn read_backward() {
    let capture: Capture = Capture::new();
    let swipe = reversed(&encode(Track::One, "%ABC?")).to_vec();
    let mut reader = CardReader::new(1, &capture, Swipes::new(&capture, [swipe])).unwrap();
    let mut o = [0; 40];

    let chars = reader.read(&mut o).unwrap();
    assert_eq!(&o[..chars], b"%ABC?Z");
    assert_eq!(reader.read_direction(), Direction::Backward);
}

#[test]
fn discard_bits_from_before_swipe() {
    static CAPTURE: Capture = Capture::new();

    // Noise on the strobe line before the card arrives.
    [true, true, false, true, false].iter().for_each(|&b| CAPTURE.push(b));

    let swipe = encode(Track::Three, ";987?").to_vec();
    let mut reader = CardReader::new(3, &CAPTURE, Swipes::new(&CAPTURE, [swipe])).unwrap();
    let mut o = [0; 40];

    let chars = reader.read(&mut o).unwrap();
    assert_eq!(&o[..chars], b";987?2");
    assert_eq!(reader.track(), Track::Three);
}

#[test]
fn reject_absent_card() {
    let capture: Capture = Capture::new();
    let mut reader = CardReader::new(2, &capture, || false).unwrap();

    assert!(!reader.available());
    assert!(matches!(reader.read(&mut [0; 40]), Err(Error::NoCardPresent)));
    assert_eq!(reader.read_direction(), Direction::Unknown);
}

#[test]
fn recover_after_unreadable_swipe() {
    let capture: Capture = Capture::new();
    let blank = vec![false; 100];
    let swipe = encode(Track::Two, ";1234?").to_vec();
    let swipes = Swipes::new(&capture, [swipe.clone(), blank, swipe]);
    let mut reader = CardReader::new(2, &capture, swipes).unwrap();
    let mut o = [0; 40];

    reader.read(&mut o).unwrap();
    assert_eq!(reader.read_direction(), Direction::Forward);

    match reader.read(&mut o) {
        Err(Error::Unreadable(err)) => {
            assert_eq!(err.forward, DecodeError::SentinelNotFound);
            assert_eq!(err.backward, DecodeError::SentinelNotFound);
        }
        other => panic!("expected an unreadable swipe, got {other:?}"),
    }
    assert_eq!(reader.read_direction(), Direction::Unknown);

    let chars = reader.read(&mut o).unwrap();
    assert_eq!(&o[..chars], b";1234?0");
    assert_eq!(reader.read_direction(), Direction::Forward);
}

#[test]
fn reject_unsupported_track() {
    let capture: Capture = Capture::new();
    let reader = CardReader::new(4, &capture, || true);
    assert!(matches!(reader, Err(TrackError::Unsupported(4))));
}
