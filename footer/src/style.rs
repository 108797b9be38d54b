use constcat::concat;

// Animation class names, shared with the markup
pub const ANIMATE_FADE_IN: &str = "animate-fade-in";
pub const ANIMATE_PULSE_HEART: &str = "animate-pulse-heart";
pub const ANIMATE_SLIDE_UP: &str = "animate-slide-up";

pub const FADE_IN: &str = r#"
@keyframes fade-in {
  from {
    opacity: 0;
  }
  to {
    opacity: 1;
  }
}
"#;

pub const PULSE_HEART: &str = r#"
@keyframes pulse-heart {
  0%,
  100% {
    transform: scale(1);
  }
  50% {
    transform: scale(1.2);
  }
}
"#;

pub const SLIDE_UP: &str = r#"
@keyframes slide-up {
  from {
    opacity: 0;
    transform: translateY(10px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}
"#;

// slide-up must keep its end state, hence the "both" fill mode
pub const ANIMATION_UTILITIES: &str = r#"
.animate-fade-in {
  animation: fade-in 0.5s ease-out;
}

.animate-pulse-heart {
  animation: pulse-heart 2s ease-in-out infinite;
}

.animate-slide-up {
  animation: slide-up 0.3s ease-out 0.2s both;
}
"#;

/// Everything the footer needs for its motion effects
pub const FOOTER_STYLES: &str = concat!(FADE_IN, PULSE_HEART, SLIDE_UP, ANIMATION_UTILITIES);
