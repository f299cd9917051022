pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-family: var(--font-sans);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-outline {
  background-color: transparent;
  color: var(--text-primary);
  border: 1px solid var(--accent-line);
}

.btn-outline:hover {
  color: var(--primary);
  border-color: var(--primary);
  text-decoration: none;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1rem;
}

/* Project cards */
.project-card {
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border: 1px solid var(--border);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-md);
}

.project-card-image {
  position: relative;
  overflow: hidden;
  width: 100%;
}

.project-card-image img {
  width: 100%;
  aspect-ratio: 16/10;
  object-fit: cover;
  transition: transform var(--transition-slow) var(--easing-standard);
}

.project-card:hover .project-card-image img {
  transform: scale(1.05);
}

.project-card-info {
  display: flex;
  flex-direction: column;
  flex: 1;
  gap: var(--space-3);
  padding: var(--space-5);
}

.project-card-info .category {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.15em;
  color: var(--primary);
}

.project-card-info .title {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  color: var(--text-primary);
}

.project-card-info .description {
  color: var(--text-secondary);
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
}

.project-card-actions {
  margin-top: auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

/* Tags */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.tag {
  font-size: 0.75rem;
  letter-spacing: 0.03em;
  padding: var(--space-1) var(--space-2);
  color: var(--text-secondary);
  background-color: var(--accent-soft);
  border: 1px solid var(--border);
  border-radius: var(--radius-sm);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

/* Responsive project grid */
.project-grid {
  display: grid;
  gap: var(--space-10);
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
}

@media (max-width: 640px) {
  .project-grid {
    grid-template-columns: 1fr;
    gap: var(--space-6);
  }
}

.empty-state {
  text-align: center;
  padding: var(--space-16) 0;
  border: 1px solid var(--border);
}

.empty-state p {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

/* Modal styles */
.modal-overlay {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background-color: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  z-index: 50;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 900px;
  max-height: 90vh;
  overflow-y: auto;
  background-color: var(--surface);
  border: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
  animation: grow-in var(--transition-slow) var(--easing-standard);
}

.btn-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  z-index: 2;
  width: 32px;
  height: 32px;
  font-size: 1.5rem;
  line-height: 1;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-primary);
}

.btn-close:hover {
  color: var(--primary);
}

.modal-gallery {
  position: relative;
  aspect-ratio: 16/9;
  background-color: var(--surface-muted);
}

.modal-gallery img {
  width: 100%;
  height: 100%;
  object-fit: contain;
  animation: fade-in var(--transition-slow) var(--easing-standard);
}

.carousel-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 40px;
  height: 40px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--surface);
  color: var(--text-primary);
  box-shadow: var(--shadow-sm);
  font-size: 1.5rem;
  cursor: pointer;
}

.carousel-arrow:hover {
  color: var(--primary);
}

.carousel-arrow.prev {
  left: var(--space-4);
}

.carousel-arrow.next {
  right: var(--space-4);
}

.carousel-dots {
  position: absolute;
  bottom: var(--space-6);
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: var(--space-2);
}

.carousel-dot {
  width: 8px;
  height: 8px;
  padding: 0;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--accent-line);
  cursor: pointer;
}

.carousel-dot.active {
  background-color: var(--primary);
}

.modal-body {
  padding: var(--space-10);
}

.modal-title-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: flex-start;
  gap: var(--space-6);
  margin-bottom: var(--space-10);
}

.modal-links {
  display: flex;
  gap: var(--space-4);
}

.modal-block {
  margin-bottom: var(--space-10);
}

.modal-block h4 {
  font-family: var(--font-serif);
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
}

.modal-block p,
.modal-block li {
  color: var(--text-secondary);
}

.modal-columns {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-10);
}

.modal-columns .modal-block {
  border-left: 1px solid var(--border);
  padding-left: var(--space-6);
}

.modal-block ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.tech-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3) var(--space-6);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.challenges {
  padding: var(--space-6);
  background-color: var(--surface-muted);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes grow-in {
  from { transform: scale(0.9); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}
"#;
