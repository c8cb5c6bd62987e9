//! Canned portfolio copy and the fixed candidate sets random handlers draw from.

/// Decorative comments appended after help, clear and unknown commands.
pub const FLAVOR_COMMENTS: [&str; 7] = [
    "// Compiling... just kidding, it's JavaScript lol",
    "// Loading with the speed of a blockchain transaction...",
    "// This code is more stable than my sleep schedule",
    "// Error 404: Social life not found",
    "// Powered by Stack Overflow and prayer",
    "// This terminal is now self-aware... hopefully friendly",
    "// Processing... please don't unplug me ",
];

/// Identity lines for `whoami`.
pub const WHOAMI_RESPONSES: [&str; 4] = [
    "You are jonathan, but more importantly, you're awesome! 🌟",
    "jonathan - A human who speaks fluent JavaScript and broken English",
    "User: jonathan | Status: Up | Mood: Optimistic | Bugs: Probably many",
    "jonathan - Professional code wrangler and coffee consumer",
];

/// Decorative forecasts for `weather`.
pub const FORECASTS: [&str; 5] = [
    "☀️ Sunny with a chance of productivity",
    "🌧️ Rainy - perfect coding weather",
    "❄️ Snow - hot chocolate and code compilation weather",
    "⛅ Cloudy with scattered semicolons",
    "🌩️ Stormy - like my relationship with CSS",
];

/// Punchlines for `joke`.
pub const JOKES: [&str; 7] = [
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why don't programmers like nature? It has too many bugs! 🌿🐛",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
    "Why did the programmer quit his job? He didn't get arrays! 📊",
    "What do you call a programmer from Finland? Nerdic! 🇫🇮",
    "Why do Java developers wear glasses? Because they can't C#! 👓",
];

/// Refusals for `sudo`.
pub const SUDO_RESPONSES: [&str; 5] = [
    "Nice try! But this isn't a real terminal 😄",
    "sudo: permission denied (and also, this is JavaScript)",
    "With great power comes great responsibility... which is why you can't have sudo",
    "sudo: command not found (but your confidence is admirable)",
    "Access denied! Try saying 'please' instead 🙏",
];

/// Files `cat` can read. Names are matched case-insensitively.
pub const VIRTUAL_FILES: [(&str, &str); 4] = [
    (
        "coffee_recipes.txt",
        "CLASSIFIED: Level 5 Coffee Security Clearance Required ☕🔒",
    ),
    (
        "random_thoughts.log",
        "Why do they call it debugging when bugs are features? 🐛\n\
         Todo: Learn to cook something other than ramen\n\
         Note: Rubber duck is my best debugging partner",
    ),
    (
        "backup_plans.zip",
        "Plan A: Become successful developer\n\
         Plan B: Professional video game tester\n\
         Plan C: Open a coffee shop that only plays lo-fi hip hop",
    ),
    ("about.txt", "Jonathan"),
];

/// Looks up a virtual file by name, ignoring ASCII case.
pub fn virtual_file(name: &str) -> Option<&'static str> {
    VIRTUAL_FILES
        .iter()
        .find(|(file, _)| file.eq_ignore_ascii_case(name))
        .map(|(_, contents)| *contents)
}

/// Biography block.
pub const ABOUT: &str = r#"About Jonathan:
<br><br>
🎓 Attended: Courant Institute of Mathematics and Stern School of Business @ NYU <br>
🎓 Double Major: Computer Science &amp; Business Technology Entrepreneurship <br>
💼 Former JP Morgan Summer Analyst in Commercial Investment Banking<br>
🔬 Applied Computer Science Researcher with published work<br>
🚀 Entrepreneur &amp; Founder of multiple student initiatives<br>
📊 Data Science enthusiast with experience in ML and AI<br>
<br>
I'm passionate about the intersection of technology and business,<br>
with hands-on experience in fintech, data analytics, and startup development.<br>
Currently based in New York, originally from the Bay Area.<br>
<br>
<span class="comment">// Fun fact: I've analyzed $1B+ worth of trades and still can't predict the stock market 📈</span>"#;

/// Skills block.
pub const SKILLS: &str = r#"Technical Skills:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br>
<strong>Technical Skills:</strong><br>
- Data Analytics<br>
- Statistical Analysis<br>
- Tableau<br>
- PostgreSQL<br>
- Python<br>
- Jupyter Notebook<br>
- Java<br>
- C<br>
- MS Office<br>
- PowerBI<br>
<br>
<strong>General Skills:</strong><br>
- Google Product Management Certified<br>
- Agile<br>
- Scrum<br>
- Jira<br>
- GSuite<br>
- Market Research<br>
- Competitive Analysis<br>
- Consulting<br>
<br>
Programming Languages:
Python<br>
Java<br>
C<br>
SQL<br>
<br>
<span class="comment">// I'm also tourist-phrasebook level fluent in file hexdumps</span>"#;

/// Work history block.
pub const EXPERIENCE: &str = r#"Professional Experience:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br>
<strong>🏦 J.P. MORGAN COMMERCIAL INVESTMENT BANK</strong> - New York, NY<br>
<strong>SUMMER ANALYST</strong> | June 2024 - August 2024<br>
- Successfully completed a job simulation focused on analyzing and auditing business processes for regulatory compliance and efficiency<br>
- Tested automated data workflow, designed process flowchart, analyzed key activities, decision points, stakeholders to enhance clarity<br>
- Investigated processes identifying 2+ risks while interfacing departments in UK and HK, uncovered potential areas for improvement<br>
- Executed in-depth review of 100+ trades/assets worth $1 Billion+, simultaneously worked on 2 distinct projects, reviewed trade records<br>
<br>
<strong>🔬 FUNDED APPLIED COMPUTER SCIENCE RESEARCH AT NYU</strong> - New York, NY<br>
<strong>Independent Student Researcher</strong> | November 2023 - May 2024<br>
- Successfully secured a competitive $350 DURF grant for computer science research through effective communication and project planning<br>
- Analyzed and forecasted financial needs throughout the length of the project accounting for ambiguous and changing costs<br>
- Investigated the evolution of digital public discourse sentiments with large language model enabled methodologies / data-based modeling<br>
- Researched segmented consumer persona sentiments for demand forecasting with the reasoning agent frameworks LLamaIndex<br>
- Published abstract in The Inquiry and presented findings at the New York Undergraduate Research Conference, paper in progress<br>
<br>
<strong>🔬 APPLIED COMPUTER SCIENCE RESEARCH AT NYU</strong> - New York, NY<br>
<strong>Research Assistant</strong> | May 2023 - September 2023<br>
- Developed optimized embeddings solution for machine learning based semantic matching of multi-channel media of images, text, audio<br>
- Devised 2 solutions for concurrent multi-media data feed processing with Langchain, Mozilla Deepspeech, and Google Cloud Vision<br>
- Prototyped and implemented user-friendly GUI frontend for data collection dashboard for A/B testing with Javascript, NextJS, HTML<br>
- Researched cost-efficient data management architecture and conceptualized human-comprehensible and auditable AI data workflows<br>
<br>
<strong>📊 DATA SCIENCE RESEARCH WITH NYU STERN PROGRAM FOR UNDERGRADUATE RESEARCH (SPUR)</strong> - New York, NY<br>
<strong>Research Assistant</strong> | October 2022 - April 2023<br>
- Synthesized 22+ NYC transportation, infrastructure, and public health datasets with Socrata Open Data, PostgreSQL, Jupyter Notebook<br>
- Analyzed quantitative data from OpenWeather API and Meteostat API using Python; data visualization with: Pandas, Folium, Mapbox<br>
- Developed solutions to cross-reference geocode data and time series data for infrastructure safety insights and analyze/predict problems<br>
- Presented analysis and data driven recommendations at Open Data Week to public, NY State senators, Office of Information &amp; Technology<br>
<br>
<strong>💼 UPROLINKS</strong> - Boston, MA<br>
<strong>Business Development Head Intern</strong> | July 2021 - August 2022<br>
- Conducted competitive analysis research, analyzed 12 industry business models; produced market research reports for new-market entry<br>
- Partnered with engineering team to create educational software for ~30 end-users; liaised with Immigrant Family Services Institute<br>
- Led intern development project, managed 4 interns with Agile development, facilitated weekly intern Scrum meetings as product owner<br>
- Created and presented a product vision and value-add slidedeck to major publishing firms, resulting in potential go-to-market funding deal<br>
<br>
<span class="comment">// Plot twist: I actually enjoyed writing reports 📊</span>"#;

/// Leadership and projects block.
pub const PROJECTS: &str = r#"Leadership Experience &amp; Projects:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br>
<strong>🚀 COMMUNIL PROJECT</strong> - New York, NY<br>
<strong>Founder/Student Entrepreneur</strong> | September 2021 - May 2024<br>
- Successfully pitched analytics focused digital-analog social media to competitive NYU Prototyping fund; received financial backing<br>
- Orchestrated customer research initiative, conducted 100+ user interviews on beachhead markets resulting in 20+ peer referrals<br>
- Presented deliverables with technical updates to fund managers, donors, and investors; achieved target business goals; pivoted accordingly<br>
- Problem-solve technical prototyping obstacles; utilized Google AppSheet and HTML/CSS with launch roadmap for Android and iOS<br>
<br>
<strong>🪙 BLOCKCHAIN AND FINTECH AT NYU STERN (NYU B&amp;S)</strong> - New York, NY<br>
<strong>Executive Board Member</strong> | February 2022 - January 2023<br>
- Managed administrative tasks and event marketing to over 1000+ students, leading to new 130+ member growth and strong engagement<br>
- Implemented project management procedures with Atlassian software; facilitated events with Binance, Paypal, JP Morgan Onyx<br>
- Researched proof methods and rollup protocols; contributed to student newsletter on Web3; developed NFT club membership badges<br>
<br>
<strong>🏆 Awards &amp; Recognition:</strong><br>
- 2022 PWC Challenge Case Competition Winner<br>
- NYU Prototyping Fund Grant Winner<br>
- NYU Data Science Meet Winner<br>
- TedX Speaker<br>
<br>
<span class="comment">// Side effect: Now I see APIs everywhere I look 👁️</span>"#;

/// Education block.
pub const EDUCATION: &str = r#"Education:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br>
<strong>🎓 NEW YORK UNIVERSITY</strong><br>
<strong>LEONARD N. STERN SCHOOL OF BUSINESS AND COURANT INSTITUTE OF MATHEMATICAL SCIENCES</strong><br>
New York, NY | <strong>EXPECTED MAY 2025</strong><br>
<br>
<strong>Computer Science and Bachelor of Science in Business, Technology, and Entrepreneurship (BTE) (Double Major)</strong><br>
- GPA: 3.873/4.00 | Honors Thesis Program | Top 10% | MAGNA CUM LAUDE | Dean's List | Founder's Day Award<br>
- SAT: 1540/1600; SAT Physics: 800/800<br>
- Honors Thesis: Investigating Practical Implementations of AI/ML Automation Technologies in Real Organizational Contexts<br>
<br>
<strong>📚 Relevant Coursework:</strong><br>
- Statistics for Business with Regression<br>
- Algorithms<br>
- Information Technology<br>
- Economics of Global Business<br>
- Managerial Accounting<br>
- Financial Accounting<br>
- Management and Organizations<br>
- Discrete Math<br>
- Artificial Intelligence<br>
- Linear Algebra<br>
- Wharton Online: Fintech<br>
<br>
<strong>🏫 BHS</strong><br>
MAY 2021<br>
<br>
<span class="comment">// Pro tip: Philosophical walks with friends is not listed as a course but should be 📖☕</span>"#;

/// Contact block.
pub const CONTACT: &str = r#"Contact Information:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br>
📧 <strong>Email:</strong> JG6911@STERN.NYU.EDU<br>
📱 <strong>Phone:</strong> [ Inquire ]<br>
📍 <strong>Location:</strong> New York, NY<br>
<br>
<strong>Best ways to reach me:</strong><br>
- Email for professional inquiries<br>
- LinkedIn for networking<br>
- Phone for urgent matters (but please don't call at 3 AM)<br>
<br>
<strong>Response time:</strong> Usually within 24 hours<br>
(Unless I'm debugging, then it might be 24 months)<br>
<br>
<span class="comment">// I promise I'm more responsive than Internet Explorer 🐌</span>"#;

/// Links block.
pub const LINKS: &str = r##"My Links &amp; Social Media:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
<br><br>
🔗 Professional:<br>
&nbsp;&nbsp;&nbsp;<a class="link" href="https://www.linkedin.com/in/-jonathangao/" target="_blank" rel="noopener noreferrer">LinkedIn Profile</a><br>
<br>
🌐 Personal Websites:<br>
&nbsp;&nbsp;&nbsp;<a class="link" href="#" target="_blank" rel="noopener noreferrer">Personal Portfolio Site</a><br>
&nbsp;&nbsp;&nbsp;<a class="link" href="#" target="_blank" rel="noopener noreferrer">Project Showcase</a><br>
<br>
💼 Professional Portfolio:<br>
&nbsp;&nbsp;&nbsp;<a class="link" href="#" target="_blank" rel="noopener noreferrer">Business Portfolio</a><br>
<br>
🚀 GitHub:<br>
&nbsp;&nbsp;&nbsp;<a class="link" href="https://github.com/jg169" target="_blank" rel="noopener noreferrer">Code Repository</a><br>
<br>
Note: Click on any link to open in a new tab!<br>
<br>
<span class="comment">// Warning: My GitHub contribution graph looks like a very sad lawn right now 🌱</span>"##;

/// Output of `ls`.
pub const DIRECTORY_LISTING: &str = r#"📁 about.txt<br>
📁 skills.json<br>
📁 experience.md<br>
📁 projects/<br>
📁 education.pdf<br>
📁 contact.vcf<br>
📁 coffee_recipes.txt<br>
📁 random_thoughts.log<br>
📁 backup_plans.zip<br>
<br>
<span class="comment">// Use 'cat &lt;filename&gt;' to view file contents</span><br>
<span class="comment">// Warning: coffee_recipes.txt is classified information ☕</span>"#;

/// Output of `coffee`.
pub const COFFEE_ART: &str = r#"<pre class="ascii-art">☕ Virtual Coffee Dispensed!

    (  )   (   )  )
     ) (   )  (  (
     ( )  (    ) )
     _____________
    &lt;_____________&gt; ___
    |             |/ _ \
    |               | | |
    |               |_| |
 ___|             |\___/
/    \___________/    \
\_____________________/
</pre>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_files_resolve_case_insensitively() {
        assert_eq!(virtual_file("about.txt"), Some("Jonathan"));
        assert_eq!(virtual_file("ABOUT.TXT"), Some("Jonathan"));
        assert_eq!(virtual_file("skills.json"), None);
    }

    #[test]
    fn listing_mentions_every_virtual_file() {
        for (name, _) in VIRTUAL_FILES {
            assert!(DIRECTORY_LISTING.contains(name), "{name} missing from ls");
        }
    }
}
