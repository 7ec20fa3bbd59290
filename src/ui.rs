pub fn render_index(namespace: &str) -> String {
    INDEX_HTML.replace("{{NAMESPACE}}", &escape_html(namespace))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Post Engagement Analysis</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2f7;
      --bg-2: #c9d8f0;
      --ink: #1f2533;
      --accent: #e4405f;
      --accent-2: #3b5b92;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 37, 51, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f6f0fb 60%, #fdf6f8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5d6475;
    }

    ul.features {
      margin: 0;
      padding-left: 20px;
      color: #4a5163;
      line-height: 1.6;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(228, 64, 95, 0.28);
    }

    button.secondary {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(59, 91, 146, 0.28);
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    .users {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .users label {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      padding: 6px 12px;
      border-radius: 999px;
      background: rgba(59, 91, 146, 0.08);
      font-size: 0.9rem;
      cursor: pointer;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(31, 37, 51, 0.08);
    }

    svg {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-grid {
      stroke: rgba(31, 37, 51, 0.1);
    }

    .chart-label {
      fill: #6e7487;
      font-size: 11px;
    }

    .status {
      min-height: 1.2em;
      color: #5d6475;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Post Engagement Analysis</h1>
      <p class="subtitle">Likes and comments per post, read from <code>{{NAMESPACE}}</code>.</p>
    </header>

    <section>
      <ul class="features">
        <li>Compare how likes relate to comments for the users you pick.</li>
        <li>See total and average engagement per user side by side.</li>
        <li>Data is fetched once per session; start a new session to fetch again.</li>
      </ul>
    </section>

    <section class="toolbar">
      <button id="load-btn" type="button">Load Data</button>
      <button id="reset-btn" class="secondary hidden" type="button">New session</button>
      <span id="summary"></span>
    </section>

    <section id="picker" class="hidden">
      <h2>Choose users</h2>
      <div class="users" id="users"></div>
    </section>

    <div class="status" id="status"></div>

    <section id="charts" class="hidden">
      <h2>Likes vs comments</h2>
      <div class="chart-card">
        <svg id="scatter" viewBox="0 0 640 300" role="img" aria-label="Likes versus comments"></svg>
      </div>
      <h2>Totals per user</h2>
      <div class="chart-card">
        <svg id="bars" viewBox="0 0 640 300" role="img" aria-label="Totals per user"></svg>
      </div>
    </section>
  </main>

  <script>
    const loadBtn = document.getElementById('load-btn');
    const resetBtn = document.getElementById('reset-btn');
    const summaryEl = document.getElementById('summary');
    const pickerEl = document.getElementById('picker');
    const usersEl = document.getElementById('users');
    const statusEl = document.getElementById('status');
    const chartsEl = document.getElementById('charts');
    const scatterEl = document.getElementById('scatter');
    const barsEl = document.getElementById('bars');

    const palette = ['#e4405f', '#3b5b92', '#f4a261', '#2a9d8f', '#8e5ea2', '#e76f51', '#264653', '#b5838d'];
    const width = 640;
    const height = 300;
    const pad = 44;

    const setStatus = (message, type) => {
      statusEl.textContent = message || '';
      statusEl.dataset.type = type || '';
    };

    const escapeText = (text) => String(text)
      .replace(/&/g, '&amp;')
      .replace(/</g, '&lt;')
      .replace(/>/g, '&gt;')
      .replace(/"/g, '&quot;')
      .replace(/'/g, '&#39;');

    const colorFor = (username, usernames) => palette[usernames.indexOf(username) % palette.length];

    const axisTicks = (max, toY) => {
      let out = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        const y = toY(value);
        out += `<line class="chart-grid" x1="${pad}" y1="${y}" x2="${width - pad}" y2="${y}" />`;
        out += `<text class="chart-label" x="${pad - 8}" y="${y + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }
      return out;
    };

    const renderScatter = (records, usernames) => {
      const points = records.filter((r) => r.likes !== null && r.comments !== null);
      if (!points.length) {
        scatterEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No posts with both counts</text>';
        return;
      }
      const maxX = Math.max(1, ...points.map((r) => r.likes));
      const maxY = Math.max(1, ...points.map((r) => r.comments));
      const toX = (v) => pad + (v / maxX) * (width - pad * 2);
      const toY = (v) => height - pad - (v / maxY) * (height - pad * 2);
      const dots = points
        .map((r) => `<circle cx="${toX(r.likes)}" cy="${toY(r.comments)}" r="6" fill="${colorFor(r.username, usernames)}" fill-opacity="0.8"><title>${escapeText(r.username)}: ${r.likes} likes, ${r.comments} comments</title></circle>`)
        .join('');
      scatterEl.innerHTML = `
        ${axisTicks(maxY, toY)}
        <text class="chart-label" x="${width / 2}" y="${height - 10}" text-anchor="middle">likes (max ${maxX})</text>
        ${dots}
      `;
    };

    const renderBars = (totals, usernames) => {
      if (!totals.length) {
        barsEl.innerHTML = '';
        return;
      }
      const max = Math.max(1, ...totals.flatMap((t) => [t.likes, t.comments]));
      const toY = (v) => height - pad - (v / max) * (height - pad * 2);
      const slot = (width - pad * 2) / totals.length;
      const barWidth = Math.min(36, slot / 3);
      const bars = totals.map((t, index) => {
        const x = pad + index * slot + slot / 2;
        const color = colorFor(t.username, usernames);
        return `
          <rect x="${x - barWidth - 2}" y="${toY(t.likes)}" width="${barWidth}" height="${height - pad - toY(t.likes)}" fill="${color}"><title>${t.likes} likes over ${t.posts} posts</title></rect>
          <rect x="${x + 2}" y="${toY(t.comments)}" width="${barWidth}" height="${height - pad - toY(t.comments)}" fill="${color}" fill-opacity="0.45"><title>${t.comments} comments over ${t.posts} posts</title></rect>
          <text class="chart-label" x="${x}" y="${height - pad + 16}" text-anchor="middle">${escapeText(t.username)}</text>
        `;
      }).join('');
      barsEl.innerHTML = `${axisTicks(max, toY)}${bars}`;
    };

    let knownUsers = [];

    const selectedUsers = () => Array.from(usersEl.querySelectorAll('input:checked')).map((input) => input.value);

    const refreshCharts = async () => {
      const res = await fetch('/api/filter', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ usernames: selectedUsers() })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to filter posts');
      }
      const data = await res.json();
      if (data.prompt) {
        chartsEl.classList.add('hidden');
        setStatus(data.prompt, 'info');
        return;
      }
      setStatus('', '');
      chartsEl.classList.remove('hidden');
      renderScatter(data.records, knownUsers);
      renderBars(data.totals, knownUsers);
    };

    const showSession = (session) => {
      if (!session.loaded) {
        summaryEl.textContent = '';
        pickerEl.classList.add('hidden');
        chartsEl.classList.add('hidden');
        resetBtn.classList.add('hidden');
        loadBtn.disabled = false;
        return;
      }
      loadBtn.disabled = true;
      resetBtn.classList.remove('hidden');
      summaryEl.textContent = `${session.record_count} posts, ${session.unique_users} unique users`;
      if (session.notice) {
        pickerEl.classList.add('hidden');
        setStatus(session.notice, 'error');
        return;
      }
      knownUsers = session.usernames;
      usersEl.innerHTML = knownUsers
        .map((name) => `<label><input type="checkbox" value="${escapeText(name)}" />${escapeText(name)}</label>`)
        .join('');
      pickerEl.classList.remove('hidden');
      refreshCharts().catch((err) => setStatus(err.message, 'error'));
    };

    usersEl.addEventListener('change', () => {
      refreshCharts().catch((err) => setStatus(err.message, 'error'));
    });

    loadBtn.addEventListener('click', async () => {
      loadBtn.disabled = true;
      setStatus('Loading data...', 'info');
      try {
        const res = await fetch('/api/load', { method: 'POST' });
        if (!res.ok) {
          throw new Error('Unable to load data');
        }
        setStatus('', '');
        showSession(await res.json());
      } catch (err) {
        loadBtn.disabled = false;
        setStatus(err.message, 'error');
      }
    });

    resetBtn.addEventListener('click', async () => {
      await fetch('/api/session', { method: 'DELETE' });
      setStatus('', '');
      showSession({ loaded: false });
    });

    fetch('/api/session')
      .then((res) => res.json())
      .then(showSession)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
