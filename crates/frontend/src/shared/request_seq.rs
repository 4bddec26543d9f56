use leptos::prelude::*;

/// Номер последнего запроса экрана: ответы старых запросов отбрасываются
#[derive(Clone, Copy)]
pub struct RequestSeq(StoredValue<u64>);

impl RequestSeq {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Номер нового запроса; все выданные раньше становятся устаревшими
    pub fn next(&self) -> u64 {
        let seq = self.0.get_value() + 1;
        self.0.set_value(seq);
        seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.0.get_value() == seq
    }
}

impl Default for RequestSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_request_is_current() {
        let owner = Owner::new();
        owner.with(|| {
            let seq = RequestSeq::new();
            let first = seq.next();
            assert!(seq.is_current(first));
            let second = seq.next();
            assert!(!seq.is_current(first));
            assert!(seq.is_current(second));
        });
    }
}
