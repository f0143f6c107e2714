/// Chart colors, assigned by position and cycled when there are more entries
pub const PALETTE: [&str; 5] = ["#0ea5e9", "#14b8a6", "#4f46e5", "#f97316", "#f43f5e"];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycles() {
        assert_eq!(color_for(0), "#0ea5e9");
        assert_eq!(color_for(4), "#f43f5e");
        assert_eq!(color_for(5), "#0ea5e9");
        assert_eq!(color_for(7), "#4f46e5");
    }
}
