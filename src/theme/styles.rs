//! Global CSS styles for the Antipolo tourist page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #2d6a4f;
  --primary-light: #52b788;
  --accent: #f4a261;
  --text-dark: #1b1b1b;
  --text-light: #f8f9fa;
  --text-muted: #6c757d;
  --surface: #ffffff;
  --surface-dark: #1a1a1a;
  --overlay: rgba(0, 0, 0, 0.9);

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', sans-serif;

  --radius: 12px;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html { scroll-behavior: smooth; }

body {
  font-family: var(--font-sans);
  color: var(--text-dark);
  background: #f4f1ea;
  line-height: 1.6;
  opacity: 0;
  transition: opacity 0.4s ease;
}

body.loaded { opacity: 1; }

.section-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 2.5rem;
}

main > section { padding: 6rem 2rem; }

/* === Header === */
#main-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  padding: 1.5rem 2rem;
  background: transparent;
  transition: background var(--transition-normal), padding var(--transition-normal);
}

#main-header.scrolled {
  padding: 0.75rem 2rem;
  background: rgba(255, 255, 255, 0.96);
  box-shadow: var(--shadow);
}

#main-header nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1200px;
  margin: 0 auto;
}

.logo {
  font-family: var(--font-serif);
  font-size: 1.75rem;
  color: var(--text-light);
  text-decoration: none;
}

#main-header.scrolled .logo { color: var(--primary); }

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-links a {
  color: var(--text-light);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

#main-header.scrolled .nav-links a { color: var(--text-dark); }
.nav-links a:hover { color: var(--accent); }

.hamburger {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
  color: var(--text-dark);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  color: var(--text-light);
  background: linear-gradient(rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.45)),
    url('assets/images/hero.jpg') center / cover no-repeat;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
}

.hero-tagline { font-size: 1.25rem; margin: 1rem 0 2rem; }

.hero-btn, .card-btn, .submit-btn, .choice-btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border: none;
  border-radius: 999px;
  background: var(--accent);
  color: var(--text-dark);
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.hero-btn:hover, .card-btn:hover, .submit-btn:hover, .choice-btn:hover {
  background: var(--primary-light);
}

/* === Destinations === */
.destination-grid, .attraction-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.destination-card, .attraction-card {
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card-image { width: 100%; height: 220px; object-fit: cover; }
.card-content { padding: 1.5rem; }
.card-content h3 { font-family: var(--font-serif); font-size: 1.5rem; }
.card-content p { color: var(--text-muted); margin: 0.5rem 0 1.25rem; }
.card-actions { display: flex; align-items: center; gap: 1rem; }
.card-link { color: var(--primary); font-weight: 500; }

/* === Reveal === */
.loading {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.loading.loaded {
  opacity: 1;
  transform: translateY(0);
}

/* === Attraction carousel === */
.attraction-gallery {
  position: relative;
  height: 260px;
  overflow: hidden;
  user-select: none;
}

.gallery-track { position: relative; width: 100%; height: 100%; touch-action: pan-y; cursor: grab; }

.gallery-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity 0.5s ease;
  cursor: zoom-in;
}

.gallery-image.active { opacity: 1; }

.icon-btn {
  border: none;
  background: rgba(0, 0, 0, 0.45);
  color: var(--text-light);
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  font-size: 1.5rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover { background: rgba(0, 0, 0, 0.7); }

.prev-btn, .next-btn { position: absolute; top: 50%; transform: translateY(-50%); }
.prev-btn { left: 0.75rem; }
.next-btn { right: 0.75rem; }

.gallery-dots {
  position: absolute;
  bottom: 0.75rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.5rem;
}

.dot {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 50%;
  border: none;
  background: rgba(255, 255, 255, 0.5);
  cursor: pointer;
}

.dot.active { background: var(--text-light); transform: scale(1.3); }

.favorite-btn { position: absolute; top: 0.75rem; right: 0.75rem; font-size: 1.25rem; }
.favorite-btn.favorited { color: #e63946; background: var(--surface); }

.attraction-info { padding: 1.25rem 1.5rem; }
.attraction-title { font-family: var(--font-serif); font-size: 1.35rem; }
.attraction-description { color: var(--text-muted); }

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
  max-width: 1200px;
  margin: 0 auto;
}

.gallery-img img { width: 100%; height: 220px; object-fit: cover; border-radius: var(--radius); }

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  max-width: 1000px;
  margin: 0 auto;
}

.contact-item { margin-bottom: 1.5rem; }
.contact-item h4 { font-family: var(--font-serif); color: var(--primary); }

.contact-form form { display: flex; flex-direction: column; gap: 1rem; }

.contact-form input, .contact-form textarea {
  padding: 0.75rem 1rem;
  border: 1px solid #d0d0d0;
  border-radius: 8px;
  font: inherit;
}

.site-footer {
  padding: 2rem;
  text-align: center;
  background: var(--surface-dark);
  color: var(--text-light);
}

/* === Overlays === */
.lightbox, .choice-modal {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
  padding: 2rem;
}

.lightbox { z-index: 3000; }
.choice-modal { z-index: 3500; }
.lightbox.show, .choice-modal.show { display: flex; }

.lightbox-content { position: relative; max-width: 90vw; max-height: 90vh; }
.lightbox-img { max-width: 90vw; max-height: 85vh; border-radius: 8px; }
.lightbox .close-btn { position: absolute; top: -3rem; right: 0; }

.choice-modal-content, .story-modal {
  position: relative;
  width: 100%;
  max-width: 600px;
  padding: 2rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: var(--radius);
  background: var(--surface-dark);
  color: var(--text-light);
}

.choice-modal-close, .story-close-btn { position: absolute; top: 1rem; right: 1rem; }
.choice-modal-title, .story-title { font-family: var(--font-serif); font-size: 2rem; margin-bottom: 1rem; }
.choice-modal-subtitle { color: #d1d5db; margin-bottom: 1.5rem; }
.choice-buttons { display: flex; gap: 1rem; flex-wrap: wrap; }

.story-modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 4000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--overlay);
}

.story-body { color: #d1d5db; line-height: 1.8; font-size: 1.1rem; }

/* === Responsive === */
@media (max-width: 768px) {
  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--surface);
    box-shadow: var(--shadow);
  }

  .nav-links.mobile-open { display: flex; }
  .nav-links li { padding: 1rem 2rem; }
  .nav-links a { color: var(--text-dark); }

  .contact-grid { grid-template-columns: 1fr; }
  main > section { padding: 4rem 1.25rem; }
}
"#;
