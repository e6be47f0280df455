//! Global CSS styles for the event page.
//!
//! Warm ivory and cocoa palette with a serif display face.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* IVORY (Backgrounds) */
  --ivory: #fffaf3;
  --ivory-deep: #f6ecdd;
  --ivory-border: #e8d9c3;

  /* COCOA (Text) */
  --cocoa: #3b2f2f;
  --cocoa-soft: rgba(59, 47, 47, 0.7);
  --cocoa-muted: rgba(59, 47, 47, 0.5);

  /* ROSE GOLD (Accents) */
  --rose: #b76e79;
  --rose-glow: rgba(183, 110, 121, 0.25);
  --gold: #c9a227;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--ivory);
  color: var(--cocoa);
  line-height: 1.6;
  min-height: 100vh;
}

.page {
  outline: none;
  min-height: 100vh;
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 5rem 1.5rem 3rem;
  background: linear-gradient(180deg, var(--ivory-deep), var(--ivory));
}

.hero-kicker {
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--cocoa-muted);
}

.hero-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--rose);
  margin: 0.75rem 0;
}

.hero-date {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  letter-spacing: 0.1em;
}

/* === Sections === */
.section {
  padding: 3rem 1.5rem;
  text-align: center;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--rose);
  margin-bottom: 1.5rem;
}

/* === Countdown === */
.countdown {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  min-height: 5.5rem;
}

.count-item {
  width: 4.5rem;
  padding: 0.75rem 0.25rem;
  border: 1px solid var(--ivory-border);
  border-radius: 12px;
  background: #fff;
  box-shadow: 0 4px 14px var(--rose-glow);
}

.count-item span {
  display: block;
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  line-height: 1.1;
  color: var(--cocoa);
}

.count-item p {
  font-size: var(--text-xs);
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--cocoa-soft);
}

.pop-in {
  opacity: 0;
  animation: pop-in 0.5s ease-out forwards;
}

@keyframes pop-in {
  0% { opacity: 0; transform: scale(0.6); }
  70% { opacity: 1; transform: scale(1.08); }
  100% { opacity: 1; transform: scale(1); }
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.gallery-item img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 10px;
  cursor: zoom-in;
}

.animate {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.animate.show {
  opacity: 1;
  transform: none;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(20, 14, 14, 0.9);
  z-index: 100;
}

.lightbox.open {
  display: flex;
}

.lightbox img {
  max-width: 92vw;
  max-height: 86vh;
  border-radius: 8px;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  background: none;
  border: none;
  color: var(--ivory);
  font-size: var(--text-2xl);
  cursor: pointer;
}

/* === Gift === */
.gift-card {
  max-width: 22rem;
  margin: 0 auto;
  padding: 1.5rem;
  border: 1px solid var(--ivory-border);
  border-radius: 16px;
  background: #fff;
}

.gift-label {
  font-size: var(--text-sm);
  color: var(--cocoa-muted);
}

.gift-account {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  letter-spacing: 0.08em;
  margin: 0.25rem 0 1rem;
}

.gift-actions {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
}

.gift-qr {
  margin-top: 1.25rem;
}

.gift-qr.hidden {
  display: none;
}

.qr-code svg {
  width: 180px;
  height: 180px;
}

.qr-error {
  font-size: var(--text-sm);
  color: var(--cocoa-muted);
}

/* === Buttons === */
.btn {
  padding: 0.6rem 1.4rem;
  border: 1px solid var(--rose);
  border-radius: 999px;
  background: var(--rose);
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn:hover {
  filter: brightness(1.08);
}

.btn-outline {
  background: transparent;
  color: var(--rose);
}

.play-fallback {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  padding: 0.6rem 1rem;
  border: none;
  border-radius: 999px;
  background: var(--cocoa);
  color: var(--ivory);
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.2);
  cursor: pointer;
  z-index: 50;
}

/* === Feedback === */
.toast {
  margin: 1rem auto 0;
  max-width: 22rem;
  padding: 0.6rem 1rem;
  border-radius: 8px;
  background: var(--cocoa);
  color: var(--ivory);
  font-size: var(--text-sm);
}
"#;
