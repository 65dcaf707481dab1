pub fn render_index() -> &'static str {
    INDEX_HTML
}

pub fn service_worker_script() -> &'static str {
    SERVICE_WORKER_JS
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f8;
      --bg-2: #cfe3ef;
      --ink: #24323c;
      --accent: #2f7d5d;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3eef5 60%, #f2f7fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(680px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    h1 {
      font-size: clamp(1.7rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: #5c6b75;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: default;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 125, 93, 0.3);
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .subject-list {
      display: grid;
      gap: 10px;
    }

    .subject-item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 14px 16px;
      cursor: pointer;
    }

    .subject-name {
      font-weight: 600;
    }

    .subject-meta {
      color: #73808a;
      font-size: 0.8rem;
    }

    .subject-right {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .subject-percent {
      font-weight: 600;
    }

    .percent-very-safe { color: #1d7a46; }
    .percent-safe { color: #4a8f2f; }
    .percent-warning { color: #b27b16; }
    .percent-danger { color: var(--danger); }

    .delete-subject {
      padding: 4px 10px;
      font-size: 0.8rem;
      background: transparent;
      color: #8b98a1;
    }

    .delete-subject:hover {
      color: var(--danger);
    }

    .month-bar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .month-bar h2 {
      font-size: 1.2rem;
    }

    .weekday-row, .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday-row span {
      text-align: center;
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b98a1;
    }

    .day {
      aspect-ratio: 1;
      display: grid;
      place-items: center;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 12px;
      font-size: 0.9rem;
    }

    .day.clickable {
      cursor: pointer;
    }

    .day.clickable:hover {
      border-color: var(--accent-2);
    }

    .day.present {
      background: #d9f0e2;
      border-color: #1d7a46;
    }

    .day.absent {
      background: #f8ddd8;
      border-color: var(--danger);
    }

    .day.noclass {
      background: #e3e9ed;
      border-color: #8b98a1;
    }

    .day.weekend {
      background: rgba(47, 72, 88, 0.08);
      color: #9aa6ae;
    }

    .day.non-class-day {
      opacity: 0.3;
    }

    .day.future {
      opacity: 0.4;
    }

    .stats-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b98a1;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .banner {
      background: #fff4d6;
      border: 1px solid #d9b23c;
      border-radius: 16px;
      padding: 14px 16px;
      font-size: 0.95rem;
    }

    .status {
      font-size: 0.9rem;
      color: #6b7880;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(36, 50, 60, 0.45);
      display: grid;
      place-items: center;
      padding: 18px;
    }

    .modal-card {
      width: min(380px, 100%);
      background: white;
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 14px;
    }

    .modal-card h2 {
      font-size: 1.15rem;
    }

    .modal-card input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    .choice-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(90px, 1fr));
      gap: 8px;
    }

    .btn-present {
      background: #1d7a46;
      color: white;
    }

    .btn-absent {
      background: var(--danger);
      color: white;
    }

    .hidden {
      display: none;
    }

    @media (max-width: 480px) {
      .app {
        padding: 24px 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <section id="subject-screen">
      <header>
        <h1>Attendance Tracker</h1>
        <p class="subtitle">Mark each class day and keep your percentage in the safe zone.</p>
      </header>
      <div id="subject-list" class="subject-list"></div>
      <button class="btn-primary" id="add-subject-btn" type="button">+ Add subject</button>
    </section>

    <section id="calendar-screen" class="hidden">
      <button class="btn-quiet" id="back-btn" type="button">&larr; Subjects</button>
      <h1 id="subject-title"></h1>
      <div id="reminder-banner" class="banner hidden">
        It&rsquo;s after 6 PM. Don&rsquo;t forget to mark today&rsquo;s attendance.
      </div>
      <div class="month-bar">
        <button class="btn-quiet" id="prev-month" type="button">&larr;</button>
        <h2 id="month-header"></h2>
        <button class="btn-quiet" id="next-month" type="button">&rarr;</button>
      </div>
      <div class="weekday-row">
        <span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span><span>Sun</span>
      </div>
      <div id="calendar" class="calendar"></div>
      <div class="stats-row">
        <div class="stat">
          <span class="label">Attended</span>
          <span class="value" id="attended-count">0</span>
        </div>
        <div class="stat">
          <span class="label">Total</span>
          <span class="value" id="total-count">0</span>
        </div>
        <div class="stat">
          <span class="label">Percentage</span>
          <span class="value" id="percentage">0%</span>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div id="add-subject-modal" class="modal hidden">
    <div class="modal-card">
      <h2>New subject</h2>
      <input id="new-subject-input" type="text" placeholder="Subject name" />
      <div class="choice-row">
        <button class="btn-primary" type="button" data-subject-type="regular">Regular</button>
        <button class="btn-quiet" type="button" data-subject-type="weekly">Weekly</button>
      </div>
      <div id="weekly-day-selector" class="choice-row hidden">
        <button class="btn-quiet" type="button" data-weekday="1">Mon</button>
        <button class="btn-quiet" type="button" data-weekday="2">Tue</button>
        <button class="btn-quiet" type="button" data-weekday="3">Wed</button>
        <button class="btn-quiet" type="button" data-weekday="4">Thu</button>
        <button class="btn-quiet" type="button" data-weekday="5">Fri</button>
      </div>
      <button class="btn-quiet" type="button" id="cancel-add">Cancel</button>
    </div>
  </div>

  <div id="status-modal" class="modal hidden">
    <div class="modal-card">
      <h2 id="status-modal-title">Mark day</h2>
      <div class="choice-row">
        <button class="btn-present" type="button" data-action="present">Present</button>
        <button class="btn-absent" type="button" data-action="absent">Absent</button>
        <button class="btn-quiet" type="button" data-action="clear">Clear</button>
      </div>
      <button class="btn-quiet" type="button" id="cancel-status">Cancel</button>
    </div>
  </div>

  <script>
    const subjectScreen = document.getElementById('subject-screen');
    const calendarScreen = document.getElementById('calendar-screen');
    const subjectListEl = document.getElementById('subject-list');
    const calendarEl = document.getElementById('calendar');
    const monthHeaderEl = document.getElementById('month-header');
    const subjectTitleEl = document.getElementById('subject-title');
    const bannerEl = document.getElementById('reminder-banner');
    const statusEl = document.getElementById('status');
    const prevBtn = document.getElementById('prev-month');
    const nextBtn = document.getElementById('next-month');
    const addModal = document.getElementById('add-subject-modal');
    const statusModal = document.getElementById('status-modal');
    const statusModalTitle = document.getElementById('status-modal-title');
    const weeklyDaySelector = document.getElementById('weekly-day-selector');
    const newSubjectInput = document.getElementById('new-subject-input');

    const view = {
      subject: null,
      year: null,
      month: null,
      nav: null,
      today: null,
      selectedDay: null,
      reminded: false
    };

    let newSubjectType = null;

    if ('Notification' in window && Notification.permission === 'default') {
      Notification.requestPermission().catch(() => {});
    }
    if ('serviceWorker' in navigator) {
      navigator.serviceWorker.register('/service-worker.js').catch(() => {});
    }

    const registerBackgroundReminder = async () => {
      if (!('serviceWorker' in navigator) || !('SyncManager' in window)) return;
      try {
        const registration = await navigator.serviceWorker.ready;
        await registration.sync.register('attendance-reminder');
      } catch (err) {
        console.log('Background sync not supported');
      }
    };

    const setStatusLine = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || 'Request failed');
      }
      return res.json();
    };

    const postJson = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const renderSubjects = (subjects) => {
      subjectListEl.innerHTML = '';
      if (!subjects.length) {
        subjectListEl.innerHTML = '<p class="subtitle">No subjects added.</p>';
        return;
      }

      const weekdayNames = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];
      subjects.forEach((subject) => {
        const item = document.createElement('div');
        item.className = 'subject-item';

        const left = document.createElement('div');
        const name = document.createElement('div');
        name.className = 'subject-name';
        name.textContent = subject.name;
        const meta = document.createElement('div');
        meta.className = 'subject-meta';
        meta.textContent = subject.type === 'weekly'
          ? 'Weekly, ' + weekdayNames[subject.weeklyDay]
          : 'Regular';
        left.append(name, meta);

        const right = document.createElement('div');
        right.className = 'subject-right';
        const percent = document.createElement('span');
        percent.className = 'subject-percent percent-' + subject.level;
        percent.textContent = subject.stats.percent.toFixed(1) + '%';
        const del = document.createElement('button');
        del.className = 'delete-subject';
        del.type = 'button';
        del.textContent = 'Delete';
        del.addEventListener('click', (event) => {
          event.stopPropagation();
          deleteSubject(subject.name);
        });
        right.append(percent, del);

        item.append(left, right);
        item.addEventListener('click', () => openSubject(subject.name));
        subjectListEl.appendChild(item);
      });
    };

    const loadSubjects = async () => {
      const data = await api('/api/subjects');
      renderSubjects(data.subjects);
    };

    const deleteSubject = async (name) => {
      if (!confirm('Delete "' + name + '" and all its records?')) return;
      try {
        const data = await api('/api/subjects/' + encodeURIComponent(name), { method: 'DELETE' });
        renderSubjects(data.subjects);
      } catch (err) {
        alert(err.message);
      }
    };

    const applyStats = (stats) => {
      document.getElementById('attended-count').textContent = stats.attended;
      document.getElementById('total-count').textContent = stats.total;
      document.getElementById('percentage').textContent =
        stats.total === 0 ? '0%' : stats.percent.toFixed(2) + '%';
    };

    const applyReminder = (remind) => {
      bannerEl.classList.toggle('hidden', !remind);
      if (remind && !view.reminded) {
        registerBackgroundReminder();
      }
      view.reminded = remind;
    };

    const renderCalendar = (month) => {
      calendarEl.innerHTML = '';
      const offset = (month.cells[0].weekday + 6) % 7;
      for (let i = 0; i < offset; i += 1) {
        calendarEl.appendChild(document.createElement('div'));
      }

      month.cells.forEach((cell) => {
        const div = document.createElement('div');
        div.className = 'day';
        div.textContent = cell.day;
        if (cell.dim) div.classList.add(cell.dim);
        if (cell.status) div.classList.add(cell.status);
        if (cell.interactable) {
          div.classList.add('clickable');
          div.addEventListener('click', () => {
            view.selectedDay = cell.date;
            statusModalTitle.textContent = 'Mark ' + cell.date;
            statusModal.classList.remove('hidden');
          });
        }
        calendarEl.appendChild(div);
      });
    };

    const applyMonth = (data) => {
      view.year = data.month.year;
      view.month = data.month.month;
      view.nav = data.nav;
      view.today = data.today;
      monthHeaderEl.textContent = data.month.label;
      nextBtn.disabled = !data.nav.next_enabled;
      renderCalendar(data.month);
      applyStats(data.stats);
      applyReminder(data.remind_today);
    };

    const fetchMonth = async (year, month) => {
      let path = '/api/subjects/' + encodeURIComponent(view.subject) + '/month';
      if (year != null && month != null) {
        path += '?year=' + year + '&month=' + month;
      }
      applyMonth(await api(path));
    };

    const openSubject = async (name) => {
      view.subject = name;
      view.reminded = false;
      subjectTitleEl.textContent = name;
      try {
        await fetchMonth();
        subjectScreen.classList.add('hidden');
        calendarScreen.classList.remove('hidden');
      } catch (err) {
        setStatusLine(err.message, 'error');
      }
    };

    const goBack = () => {
      view.subject = null;
      calendarScreen.classList.add('hidden');
      subjectScreen.classList.remove('hidden');
      loadSubjects().catch((err) => setStatusLine(err.message, 'error'));
    };

    const closeStatusModal = () => {
      statusModal.classList.add('hidden');
      view.selectedDay = null;
    };

    const markStatus = async (action) => {
      const day = view.selectedDay;
      closeStatusModal();
      try {
        const res = await postJson(
          '/api/subjects/' + encodeURIComponent(view.subject) + '/records',
          { day, action }
        );
        // Marking today always dismisses the banner right away.
        if (day === res.today) {
          bannerEl.classList.add('hidden');
        }
        applyStats(res.stats);
        applyReminder(res.remind_today);
        await fetchMonth(view.year, view.month);
      } catch (err) {
        alert(err.message);
      }
    };

    const openAddModal = () => {
      newSubjectType = null;
      weeklyDaySelector.classList.add('hidden');
      addModal.classList.remove('hidden');
      newSubjectInput.focus();
    };

    const closeAddModal = () => {
      addModal.classList.add('hidden');
    };

    const createSubject = async (weeklyDay) => {
      const name = newSubjectInput.value.trim();
      if (!name) {
        alert('Enter subject name first');
        return;
      }
      try {
        const body = { name, type: newSubjectType };
        if (newSubjectType === 'weekly') {
          body.weeklyDay = weeklyDay;
        }
        const data = await postJson('/api/subjects', body);
        newSubjectInput.value = '';
        closeAddModal();
        renderSubjects(data.subjects);
      } catch (err) {
        alert(err.message);
      }
    };

    addModal.querySelectorAll('[data-subject-type]').forEach((button) => {
      button.addEventListener('click', () => {
        newSubjectType = button.dataset.subjectType;
        if (newSubjectType === 'weekly') {
          weeklyDaySelector.classList.remove('hidden');
        } else {
          createSubject();
        }
      });
    });

    weeklyDaySelector.querySelectorAll('[data-weekday]').forEach((button) => {
      button.addEventListener('click', () => createSubject(Number(button.dataset.weekday)));
    });

    statusModal.querySelectorAll('[data-action]').forEach((button) => {
      button.addEventListener('click', () => markStatus(button.dataset.action));
    });

    document.getElementById('add-subject-btn').addEventListener('click', openAddModal);
    document.getElementById('cancel-add').addEventListener('click', closeAddModal);
    document.getElementById('cancel-status').addEventListener('click', closeStatusModal);
    document.getElementById('back-btn').addEventListener('click', goBack);
    prevBtn.addEventListener('click', () => fetchMonth(view.nav.prev.year, view.nav.prev.month));
    nextBtn.addEventListener('click', () => {
      if (view.nav.next_enabled) {
        fetchMonth(view.nav.next.year, view.nav.next.month);
      }
    });

    loadSubjects().catch((err) => setStatusLine(err.message, 'error'));
  </script>
</body>
</html>
"#;

const SERVICE_WORKER_JS: &str = r#"self.addEventListener('install', () => {
  self.skipWaiting();
});

self.addEventListener('activate', () => {
  self.clients.claim();
});

self.addEventListener('sync', (event) => {
  if (event.tag === 'attendance-reminder') {
    event.waitUntil(showReminder());
  }
});

async function showReminder() {
  const clients = await self.clients.matchAll({ type: 'window' });

  // A visible window already nags by itself.
  if (clients.length > 0) return;

  self.registration.showNotification('Attendance Reminder', {
    body: "It's after 6 PM. Don't forget to mark today's attendance."
  });
}
"#;
