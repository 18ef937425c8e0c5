use rand::{thread_rng, Rng};
use regex::Regex;
use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};

/// Get EPOCH timestamp in seconds
pub fn get_epoch_ts() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Generate OTP of a given length
pub fn generate_otp(len: u32) -> String {
    let mut rng = thread_rng();
    (0..len)
        .map(|_| {
            let n = rng.gen_range(0..10);
            char::from_digit(n, 10).unwrap_or('0')
        })
        .collect()
}

/// Normalize an email for use as the identity key of an otp record
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// replace placeholder variables from the template text
/// placeholders are of patters {{variable}}
pub fn replace_placeholders(s: &str, options: HashMap<String, String>) -> anyhow::Result<String> {
    let re = Regex::new(r"\{\{(\w+)\}\}")?;
    let mut options = options;
    let mut replaced = String::from(s);
    for cap in re.captures_iter(s) {
        let var = &cap[1];
        if let Some(val) = options.get(var) {
            let find = &cap[0];
            let find = find.replace("{", r"\{");
            let find = find.replace("}", r"\}");
            if let Ok(re) = Regex::new(&find) {
                let rs = re.replace_all(&replaced, val.as_str());
                replaced = rs.to_string();
                options.remove(var);
            }
        }
    }

    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use super::*;

    #[test]
    fn test_get_epoch_ts() {
        let d = Duration::from_secs(1);
        let t1 = get_epoch_ts();
        thread::sleep(d);
        let t2 = get_epoch_ts();
        assert_eq!(t1 > 0, true);
        assert_eq!(t2 > 0, true);
        assert_eq!(t1 + 1 <= t2, true);
    }

    #[test]
    fn test_generate_otp_zero_len() {
        let otp = generate_otp(0);
        assert_eq!(otp, String::new());
    }

    #[test]
    fn test_generate_otp_six_len() {
        let otp = generate_otp(6);
        assert_eq!(otp.len(), 6);
        assert_eq!(otp.chars().all(|ch| ch.is_ascii_digit()), true);
    }

    #[test]
    fn test_generate_otp_random() {
        let otp1 = generate_otp(6);
        let otp2 = generate_otp(6);
        assert_ne!(otp1, otp2);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("Ann@Example.COM"), "ann@example.com");
        assert_eq!(normalize_email("  bo@example.com "), "bo@example.com");
        assert_eq!(normalize_email("cid@example.com"), "cid@example.com");
    }

    #[test]
    fn test_replace_placeholders() {
        let template = "Hello {{name}}, your code is {{otp}}";
        let mut options = HashMap::new();
        options.insert("name".to_owned(), "Ann".to_owned());
        options.insert("otp".to_owned(), "123456".to_owned());
        let replaced = replace_placeholders(template, options).unwrap();
        assert_eq!(replaced, "Hello Ann, your code is 123456");
    }
}
