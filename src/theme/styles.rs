//! Global CSS styles for the portfolio desktop.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0b1120;
  --night-raised: #111a2c;
  --night-border: #1d2a40;

  /* MAIN / ACCENT */
  --main-color: #00abf0;
  --main-glow: rgba(0, 171, 240, 0.35);
  --accent-color: #7a5cff;

  /* TEXT */
  --text-primary: #ededed;
  --text-secondary: rgba(237, 237, 237, 0.7);
  --text-muted: rgba(237, 237, 237, 0.45);

  /* SEMANTIC */
  --success: #2ecc71;
  --warning: #f39c12;
  --danger: #e74c3c;
  --info: #3498db;

  /* Transitions */
  --transition-fast: 0.2s ease;
  --transition-section: 0.5s ease;
}

/* === Reset === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
  background: var(--night);
  color: var(--text-primary);
  font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
  scroll-behavior: smooth;
}

.app-shell {
  min-height: 100vh;
  outline: none;
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 6%;
  background: rgba(11, 17, 32, 0.92);
  border-bottom: 1px solid var(--night-border);
  backdrop-filter: blur(8px);
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
  text-decoration: none;
  letter-spacing: 0.02em;
  cursor: pointer;
}

.logo-accent {
  color: var(--main-color);
}

.navbar {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: 1rem;
  padding-bottom: 0.25rem;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
  cursor: pointer;
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--main-color);
  border-bottom-color: var(--main-color);
}

/* === Sections === */
.sections {
  padding: 3rem 6% 5rem;
}

.section {
  display: none;
  opacity: 0;
}

.section.active {
  display: block;
  animation: section-fade-in var(--transition-section) forwards;
}

@keyframes section-fade-in {
  from {
    opacity: 0;
    transform: translateY(18px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.section-title {
  font-size: 2rem;
  margin-bottom: 0.75rem;
}

.section-lead {
  color: var(--text-secondary);
  margin-bottom: 2rem;
  max-width: 42rem;
}

/* === Page transition overlay === */
.page-transition-overlay {
  position: fixed;
  inset: 0;
  z-index: 900;
  background: linear-gradient(135deg, var(--night), var(--night-raised));
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.3s ease;
}

.page-transition-overlay.active {
  opacity: 1;
  pointer-events: all;
}

/* === Hero === */
.hero {
  max-width: 46rem;
  padding-top: 4rem;
}

.hero-greeting {
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.hero-name {
  font-size: 3.2rem;
  line-height: 1.15;
  margin: 0.25rem 0;
}

.hero-role {
  font-size: 1.6rem;
  font-weight: 500;
  margin-bottom: 1.25rem;
}

.typing-text {
  color: var(--main-color);
}

.typing-caret {
  display: inline-block;
  width: 2px;
  height: 1.2em;
  margin-left: 3px;
  vertical-align: text-bottom;
  background: var(--accent-color);
  animation: caret-blink 0.8s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.hero-summary {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: 2rem;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.7rem 1.6rem;
  border: none;
  border-radius: 6px;
  background: var(--main-color);
  color: var(--night);
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: box-shadow var(--transition-fast), transform var(--transition-fast);
}

.btn:hover {
  box-shadow: 0 0 18px var(--main-glow);
  transform: translateY(-1px);
}

.btn-outline {
  padding: 0.55rem 1.1rem;
  border: 1px solid var(--night-border);
  border-radius: 6px;
  background: transparent;
  color: var(--text-secondary);
  font-size: 0.9rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.btn-outline:hover {
  border-color: var(--main-color);
  color: var(--main-color);
}

/* === Practical works === */
.tp-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(330px, 1fr));
  gap: 1.5rem;
}

.tp-card {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: 1.5rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 10px;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.tp-card:hover {
  transform: translateY(-4px);
  border-color: var(--main-color);
}

.tp-title {
  margin-bottom: 0.5rem;
}

.tp-description {
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: 1rem;
}

.tp-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
}

.tp-tag {
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: rgba(0, 171, 240, 0.12);
  color: var(--main-color);
  font-size: 0.78rem;
}

.tp-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.6rem;
}

/* === Services === */
.service-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.service-card {
  padding: 1.75rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 10px;
  transition: border-color var(--transition-fast);
}

.service-card:hover {
  border-color: var(--accent-color);
}

.service-title {
  margin-bottom: 0.6rem;
}

.service-description {
  color: var(--text-secondary);
  line-height: 1.6;
}

/* === Contact === */
.contact-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 38rem;
}

.contact-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 8px;
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 0.15rem;
}

.contact-label {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

.contact-value {
  color: var(--text-primary);
}

.contact-actions {
  display: flex;
  gap: 0.5rem;
}

/* === Render modal === */
.render-modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(4, 8, 16, 0.85);
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.3s ease;
}

.render-modal.active {
  opacity: 1;
  pointer-events: all;
}

.modal-content {
  width: min(860px, 90vw);
  max-height: 88vh;
  overflow: auto;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-radius: 12px;
  padding: 1.25rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.modal-title {
  font-size: 1.15rem;
}

.modal-close {
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-size: 1.6rem;
  line-height: 1;
  cursor: pointer;
}

.modal-close:hover {
  color: var(--danger);
}

.modal-media {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.modal-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 3rem 0;
  color: var(--text-secondary);
}

.loading-spinner {
  width: 36px;
  height: 36px;
  border: 3px solid var(--night-border);
  border-top-color: var(--main-color);
  border-radius: 50%;
  animation: spinner-turn 0.9s linear infinite;
}

@keyframes spinner-turn {
  to { transform: rotate(360deg); }
}

.modal-image,
.modal-video {
  max-width: 100%;
  max-height: 68vh;
  border-radius: 8px;
}

.modal-image.fallback {
  opacity: 0.85;
}

.modal-error {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 2rem 1rem;
  text-align: center;
  color: var(--text-secondary);
}

.modal-error-icon {
  font-size: 2rem;
  color: var(--warning);
}

.modal-error code {
  display: inline-block;
  padding: 0.25rem 0.6rem;
  border-radius: 4px;
  background: var(--night);
  color: var(--main-color);
  font-size: 0.85rem;
  word-break: break-all;
}

/* === Notifications === */
.notification {
  position: fixed;
  top: 5.5rem;
  right: 1.5rem;
  z-index: 1100;
  display: flex;
  align-items: center;
  gap: 0.6rem;
  max-width: 22rem;
  padding: 0.8rem 1.1rem;
  background: var(--night-raised);
  border: 1px solid var(--night-border);
  border-left-width: 3px;
  border-radius: 8px;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  animation: toast-slide-in 0.3s ease forwards;
  transition: transform 0.3s ease, opacity 0.3s ease;
}

.notification.exiting {
  animation: none;
  transform: translateX(150%);
  opacity: 0;
}

@keyframes toast-slide-in {
  from { transform: translateX(150%); }
  to { transform: translateX(0); }
}

.notification-icon {
  font-weight: 700;
}

.notification.info { border-left-color: var(--info); }
.notification.info .notification-icon { color: var(--info); }
.notification.success { border-left-color: var(--success); }
.notification.success .notification-icon { color: var(--success); }
.notification.warning { border-left-color: var(--warning); }
.notification.warning .notification-icon { color: var(--warning); }
.notification.error { border-left-color: var(--danger); }
.notification.error .notification-icon { color: var(--danger); }
"#;
