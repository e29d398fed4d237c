const HEALTH_TIPS: [&str; 5] = [
    "Take your vitamin D supplement with breakfast.",
    "Aim for at least two liters of water today.",
    "Log your meals to keep calorie tracking accurate.",
    "A ten minute walk goes a long way towards the daily step goal.",
    "Check upcoming teleconsultations so you are not caught off guard.",
];

/// Hands out health tips in a fixed round-robin order.
#[derive(Default)]
pub struct TipRotation {
    next: usize,
}

impl TipRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tip(&mut self) -> &'static str {
        let tip = HEALTH_TIPS[self.next];
        self.next = (self.next + 1) % HEALTH_TIPS.len();
        tip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_wrap_around() {
        let mut tips = TipRotation::new();
        let first = tips.next_tip();

        for _ in 1..HEALTH_TIPS.len() {
            assert_ne!(tips.next_tip(), first);
        }

        assert_eq!(tips.next_tip(), first);
    }
}
