use super::*;

fn blog() -> Scrambler {
    Scrambler::new("BLOG / MY POST", &ScrambleChars::UpperCase, 0.7, 0.15, 3)
}

#[test]
fn starts_empty_and_ends_on_target() {
    let s = blog();
    assert_eq!(s.render(0.0), "");
    assert_eq!(s.render(0.7), "BLOG / MY POST");
    assert_eq!(s.render(5.0), "BLOG / MY POST");
}

#[test]
fn nothing_resolves_before_reveal_delay() {
    let s = blog();
    assert_eq!(s.revealed_len(0.1), 0);
    let mid = s.render(0.1);
    assert!(!mid.is_empty());
    assert!(mid.chars().count() < "BLOG / MY POST".chars().count());
}

#[test]
fn revealed_prefix_matches_target() {
    let s = blog();
    let target: Vec<char> = "BLOG / MY POST".chars().collect();
    let mut last = 0;
    for i in 0..=70 {
        let t = f64::from(i) * 0.01;
        let revealed = s.revealed_len(t);
        assert!(revealed >= last);
        last = revealed;
        let text: Vec<char> = s.render(t).chars().collect();
        assert!(text.len() >= revealed);
        assert_eq!(&text[..revealed], &target[..revealed]);
    }
}

#[test]
fn whitespace_is_never_scrambled() {
    let s = blog();
    let text: Vec<char> = s.render(0.3).chars().collect();
    for (i, c) in text.iter().enumerate() {
        if "BLOG / MY POST".chars().nth(i) == Some(' ') {
            assert_eq!(*c, ' ');
        }
    }
}

#[test]
fn scrambled_chars_come_from_the_pool() {
    let s = Scrambler::new("HOME", &ScrambleChars::Custom("#".to_string()), 1.0, 1.0, 0);
    assert_eq!(s.render(0.99), "####");
}

#[test]
fn output_is_deterministic_for_a_seed() {
    assert_eq!(blog().render(0.33), blog().render(0.33));
}

#[test]
fn empty_pool_falls_back_to_upper_case() {
    let s = Scrambler::new("AB", &ScrambleChars::Custom(String::new()), 1.0, 1.0, 0);
    assert!(s.render(0.9).chars().all(|c| c.is_ascii_uppercase()));
}
