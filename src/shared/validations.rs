pub fn validate_pagination(page: Option<u64>, limit: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        assert_eq!(validate_pagination(None, None), (1, 20));
    }

    #[test]
    fn zero_page_clamped_to_one() {
        assert_eq!(validate_pagination(Some(0), Some(0)), (1, 1));
    }

    #[test]
    fn oversized_limit_clamped() {
        assert_eq!(validate_pagination(Some(3), Some(1000)), (3, 100));
    }
}
